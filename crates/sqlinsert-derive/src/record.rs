//! Record derive macro implementation

mod attrs;

use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Fields, Result};

pub fn expand(input: DeriveInput) -> Result<TokenStream> {
    let name = &input.ident;

    // Every type parameter ends up bound as a value.
    let mut generics = input.generics.clone();
    let type_params: Vec<syn::Ident> = generics.type_params().map(|p| p.ident.clone()).collect();
    let predicates = &mut generics.make_where_clause().predicates;
    for param in &type_params {
        predicates.push(syn::parse_quote!(#param: sqlinsert::SqlValue));
    }
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    &input,
                    "Record can only be derived for structs with named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                &input,
                "Record can only be derived for structs",
            ));
        }
    };

    let mut descriptors = Vec::with_capacity(fields.len());
    let mut pushes = Vec::with_capacity(fields.len());

    for field in fields {
        let Some(field_ident) = field.ident.as_ref() else {
            continue;
        };
        let ident_str = field_ident.to_string();
        let tags = attrs::field_tags(field)?;
        let keys = tags.iter().map(|t| &t.key);
        let names = tags.iter().map(|t| &t.name);

        descriptors.push(quote! {
            sqlinsert::Field::new(#ident_str, &[#((#keys, #names)),*])
        });
        pushes.push(quote! {
            out.push(&self.#field_ident);
        });
    }

    Ok(quote! {
        impl #impl_generics sqlinsert::Record for #name #ty_generics #where_clause {
            fn fields() -> &'static [sqlinsert::Field] {
                const FIELDS: &[sqlinsert::Field] = &[#(#descriptors),*];
                FIELDS
            }

            fn push_values<'__sqlinsert>(&'__sqlinsert self, out: &mut sqlinsert::Args<'__sqlinsert>) {
                #(#pushes)*
            }
        }
    })
}
