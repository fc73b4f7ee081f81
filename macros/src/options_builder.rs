use proc_macro2::TokenStream;
use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput, Fields, GenericArgument, PathArguments, Type};

pub(super) fn parse(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = input.ident;
    let generics = input.generics;

    let fields = match input.data {
        Data::Struct(data) => match data.fields {
            Fields::Named(fields) => fields.named,
            _ => panic!("OptionsBuilder only supports structs with named fields"),
        },
        _ => panic!("OptionsBuilder only supports structs"),
    };

    let setters = fields.iter().map(|field| {
        let field_name = field.ident.as_ref().expect("named field");
        let inner = option_inner(&field.ty).unwrap_or_else(|| {
            panic!(
                "OptionsBuilder field `{}` must be `Option<T>`",
                field_name
            )
        });

        quote! {
            pub fn #field_name(mut self, value: impl Into<#inner>) -> Self {
                self.#field_name = Some(value.into());
                self
            }
        }
    });

    let expanded: TokenStream = quote! {
        impl #generics #name #generics {
            pub fn new() -> Self {
                Self::default()
            }

            #(#setters)*
        }
    };

    expanded.into()
}

fn option_inner(ty: &Type) -> Option<Type> {
    let Type::Path(path) = ty else { return None };
    let segment = path.path.segments.last()?;
    if segment.ident != "Option" {
        return None;
    }
    let PathArguments::AngleBracketed(args) = &segment.arguments else {
        return None;
    };
    args.args.iter().find_map(|arg| match arg {
        GenericArgument::Type(ty) => Some(ty.clone()),
        _ => None,
    })
}
