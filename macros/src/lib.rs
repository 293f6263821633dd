use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, spanned::Spanned};

/// Implement `maybe::Nullable` by delegating to one field.
///
/// The field is the only field of the struct, or the one marked with
/// `#[nullable]`.
#[proc_macro_derive(Nullable, attributes(nullable))]
pub fn nullable(item: TokenStream) -> TokenStream {
    let item = parse_macro_input!(item as syn::DeriveInput);

    match derive_nullable(&item) {
        Ok(expanded) => TokenStream::from(expanded),
        Err(err) => TokenStream::from(err.to_compile_error()),
    }
}

fn derive_nullable(
    item: &syn::DeriveInput,
) -> syn::Result<proc_macro2::TokenStream> {
    let struct_name = &item.ident;

    let syn::Data::Struct(s) = &item.data else {
        return Err(syn::Error::new(
            item.span(),
            "Nullable can only be derived for structs",
        ));
    };

    let (field, field_ty) = nullable_field(&s.fields, item.span())?;

    let mut generics = item.generics.clone();
    generics
        .make_where_clause()
        .predicates
        .push(syn::parse_quote!(#field_ty: maybe::Nullable));
    let (impl_generics, ty_generics, where_clause) =
        generics.split_for_impl();

    Ok(quote!(
        impl #impl_generics maybe::Nullable for #struct_name #ty_generics
            #where_clause
        {
            fn is_null(&self) -> bool {
                maybe::Nullable::is_null(&self.#field)
            }
        }
    ))
}

/// Accessor and type of the field to delegate to
fn nullable_field(
    fields: &syn::Fields,
    span: proc_macro2::Span,
) -> syn::Result<(proc_macro2::TokenStream, &syn::Type)> {
    let accessor = |i: usize, f: &syn::Field| match &f.ident {
        Some(ident) => quote!(#ident),
        None => {
            let index = syn::Index::from(i);
            quote!(#index)
        }
    };

    let marked: Vec<_> = fields
        .iter()
        .enumerate()
        .filter(|(_, f)| {
            f.attrs.iter().any(|attr| attr.path().is_ident("nullable"))
        })
        .collect();

    match (marked.as_slice(), fields.len()) {
        ([(i, f)], _) => Ok((accessor(*i, *f), &f.ty)),
        ([], 1) => {
            let f = fields.iter().next().expect("one field");
            Ok((accessor(0, f), &f.ty))
        }
        ([], 0) => Err(syn::Error::new(
            span,
            "Nullable needs a field to delegate to",
        )),
        ([], _) => Err(syn::Error::new(
            span,
            "mark the field to delegate to with #[nullable]",
        )),
        ([_, (_, f), ..], _) => Err(syn::Error::new(
            f.span(),
            "only one field can be marked #[nullable]",
        )),
    }
}
