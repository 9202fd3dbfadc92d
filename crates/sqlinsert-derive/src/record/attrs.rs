//! Attribute parsing for the Record derive macro.

use syn::{Error, Expr, ExprLit, Lit, LitStr, Meta, Result, Token};
use syn::punctuated::Punctuated;

/// Default annotation key, written as `#[col = "name"]`.
const COL_KEY: &str = "col";

/// One `key = "name"` annotation on a field.
pub(super) struct FieldTag {
    pub(super) key: String,
    pub(super) name: String,
}

/// Collect the annotations of a field in declaration order.
///
/// Accepts `#[col = "name"]`, `#[col("name")]` and `#[tag(key = "name", ...)]`.
pub(super) fn field_tags(field: &syn::Field) -> Result<Vec<FieldTag>> {
    let mut tags: Vec<FieldTag> = Vec::new();

    for attr in &field.attrs {
        if attr.path().is_ident(COL_KEY) {
            let name = match &attr.meta {
                Meta::NameValue(nv) => lit_str(&nv.value)?.value(),
                Meta::List(_) => attr.parse_args::<LitStr>()?.value(),
                Meta::Path(_) => {
                    return Err(Error::new_spanned(
                        attr,
                        "expected #[col = \"name\"] or #[col(\"name\")]",
                    ));
                }
            };
            push_tag(&mut tags, attr, COL_KEY.to_string(), name)?;
        } else if attr.path().is_ident("tag") {
            let pairs =
                attr.parse_args_with(Punctuated::<syn::MetaNameValue, Token![,]>::parse_terminated)?;
            for pair in pairs {
                let key = pair
                    .path
                    .get_ident()
                    .ok_or_else(|| Error::new_spanned(&pair.path, "tag key must be an identifier"))?
                    .to_string();
                let name = lit_str(&pair.value)?.value();
                push_tag(&mut tags, attr, key, name)?;
            }
        }
    }

    Ok(tags)
}

fn push_tag(tags: &mut Vec<FieldTag>, attr: &syn::Attribute, key: String, name: String) -> Result<()> {
    if tags.iter().any(|t| t.key == key) {
        return Err(Error::new_spanned(
            attr,
            format!("duplicate annotation key `{key}` on field"),
        ));
    }
    tags.push(FieldTag { key, name });
    Ok(())
}

fn lit_str(expr: &Expr) -> Result<&LitStr> {
    match expr {
        Expr::Lit(ExprLit {
            lit: Lit::Str(lit), ..
        }) => Ok(lit),
        other => Err(Error::new_spanned(other, "expected a string literal")),
    }
}
