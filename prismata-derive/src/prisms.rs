//! Implementation of the `#[derive(Prisms)]` macro.
//!
//! Every variant gets a `{variant}_prism()` method whose `get_option` is a
//! `match` on that variant, cloning the payload out.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{Data, DeriveInput, Fields, Generics, Ident, Type, Variant, parse_macro_input};

/// Main implementation of the Prisms derive macro.
pub fn derive_prisms_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let name = &input.ident;
    let generics = &input.generics;

    let expanded = match &input.data {
        Data::Enum(data_enum) => {
            generate_enum_prisms(name, generics, &data_enum.variants.iter().collect::<Vec<_>>())
        }
        Data::Struct(_) => syn::Error::new_spanned(
            &input.ident,
            "Prisms can only be derived for enums, not structs. Use #[derive(Lenses)] for structs.",
        )
        .to_compile_error(),
        Data::Union(_) => {
            syn::Error::new_spanned(&input.ident, "Prisms cannot be derived for unions.")
                .to_compile_error()
        }
    };

    TokenStream::from(expanded)
}

fn generate_enum_prisms(name: &Ident, generics: &Generics, variants: &[&Variant]) -> TokenStream2 {
    let prism_methods: Vec<TokenStream2> = variants
        .iter()
        .map(|variant| generate_variant_prism(variant))
        .collect();

    // Payloads are cloned out on extraction.
    let mut generics = generics.clone();
    let type_params: Vec<Ident> = generics.type_params().map(|param| param.ident.clone()).collect();
    let where_clause = generics.make_where_clause();
    for type_param in type_params {
        where_clause
            .predicates
            .push(syn::parse_quote!(#type_param: ::core::clone::Clone));
    }

    let (impl_generics, type_generics, where_clause) = generics.split_for_impl();

    quote! {
        impl #impl_generics #name #type_generics #where_clause {
            #(#prism_methods)*
        }
    }
}

fn generate_variant_prism(variant: &Variant) -> TokenStream2 {
    let variant_name = &variant.ident;
    let method_name = format_ident!("{}_prism", to_snake_case(&variant_name.to_string()));

    match &variant.fields {
        Fields::Unit => generate_unit_variant_prism(variant_name, &method_name),
        Fields::Unnamed(fields) => {
            let field_types: Vec<&Type> = fields.unnamed.iter().map(|field| &field.ty).collect();

            if let [field_type] = field_types.as_slice() {
                generate_single_field_tuple_prism(variant_name, &method_name, field_type)
            } else {
                generate_multi_field_tuple_prism(variant_name, &method_name, &field_types)
            }
        }
        Fields::Named(fields) => {
            let field_names: Vec<&Ident> = fields
                .named
                .iter()
                .filter_map(|field| field.ident.as_ref())
                .collect();
            let field_types: Vec<&Type> = fields.named.iter().map(|field| &field.ty).collect();

            generate_struct_variant_prism(variant_name, &method_name, &field_names, &field_types)
        }
    }
}

/// Unit variants focus on `()`.
fn generate_unit_variant_prism(variant_name: &Ident, method_name: &Ident) -> TokenStream2 {
    let label = variant_name.to_string();

    quote! {
        #[doc = concat!("Returns a prism focusing on the `", #label, "` variant.")]
        #[inline]
        #[must_use]
        pub fn #method_name() -> impl ::prismata::optics::Prism<Self, ()> + Clone {
            ::prismata::optics::FunctionPrism::named(
                #label,
                |source: &Self| match source {
                    Self::#variant_name => Some(()),
                    #[allow(unreachable_patterns)]
                    _ => None,
                },
                |(): ()| Self::#variant_name,
            )
        }
    }
}

fn generate_single_field_tuple_prism(
    variant_name: &Ident,
    method_name: &Ident,
    field_type: &Type,
) -> TokenStream2 {
    let label = variant_name.to_string();

    quote! {
        #[doc = concat!("Returns a prism focusing on the `", #label, "` variant.")]
        #[inline]
        #[must_use]
        pub fn #method_name() -> impl ::prismata::optics::Prism<Self, #field_type> + Clone {
            ::prismata::optics::FunctionPrism::named(
                #label,
                |source: &Self| match source {
                    Self::#variant_name(value) => Some(::core::clone::Clone::clone(value)),
                    #[allow(unreachable_patterns)]
                    _ => None,
                },
                |value: #field_type| Self::#variant_name(value),
            )
        }
    }
}

/// Multi-field tuple variants focus on a tuple of their fields.
fn generate_multi_field_tuple_prism(
    variant_name: &Ident,
    method_name: &Ident,
    field_types: &[&Type],
) -> TokenStream2 {
    let label = variant_name.to_string();
    let tuple_type = quote! { (#(#field_types),*) };
    let pattern_vars: Vec<Ident> = (0..field_types.len())
        .map(|index| format_ident!("v{}", index))
        .collect();

    quote! {
        #[doc = concat!("Returns a prism focusing on the `", #label, "` variant as a tuple.")]
        #[inline]
        #[must_use]
        pub fn #method_name() -> impl ::prismata::optics::Prism<Self, #tuple_type> + Clone {
            ::prismata::optics::FunctionPrism::named(
                #label,
                |source: &Self| match source {
                    Self::#variant_name(#(#pattern_vars),*) => {
                        Some((#(::core::clone::Clone::clone(#pattern_vars)),*))
                    }
                    #[allow(unreachable_patterns)]
                    _ => None,
                },
                |(#(#pattern_vars),*): #tuple_type| Self::#variant_name(#(#pattern_vars),*),
            )
        }
    }
}

/// Struct variants focus on a tuple of their fields in declaration order.
fn generate_struct_variant_prism(
    variant_name: &Ident,
    method_name: &Ident,
    field_names: &[&Ident],
    field_types: &[&Type],
) -> TokenStream2 {
    let label = variant_name.to_string();
    let tuple_type = quote! { (#(#field_types),*) };

    quote! {
        #[doc = concat!("Returns a prism focusing on the `", #label, "` variant's fields as a tuple.")]
        #[inline]
        #[must_use]
        pub fn #method_name() -> impl ::prismata::optics::Prism<Self, #tuple_type> + Clone {
            ::prismata::optics::FunctionPrism::named(
                #label,
                |source: &Self| match source {
                    Self::#variant_name { #(#field_names),* } => {
                        Some((#(::core::clone::Clone::clone(#field_names)),*))
                    }
                    #[allow(unreachable_patterns)]
                    _ => None,
                },
                |(#(#field_names),*): #tuple_type| Self::#variant_name { #(#field_names),* },
            )
        }
    }
}

/// Converts a `CamelCase` or `PascalCase` string to `snake_case`.
fn to_snake_case(input: &str) -> String {
    let mut result = String::with_capacity(input.len() + 4);
    let chars: Vec<char> = input.chars().collect();

    for (index, &character) in chars.iter().enumerate() {
        if character.is_uppercase() {
            if index > 0 {
                let previous_char = chars[index - 1];
                let next_is_lowercase = chars.get(index + 1).is_some_and(|c| c.is_lowercase());

                // "keyPress" -> "key_press", "XMLParser" -> "xml_parser"
                if previous_char.is_lowercase() || (previous_char.is_uppercase() && next_is_lowercase)
                {
                    result.push('_');
                }
            }
            result.extend(character.to_lowercase());
        } else {
            result.push(character);
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Circle", "circle")]
    #[case("KeyPress", "key_press")]
    #[case("HTTPRequest", "http_request")]
    #[case("XMLParser", "xml_parser")]
    #[case("none", "none")]
    #[case("A", "a")]
    fn to_snake_case_cases(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(to_snake_case(input), expected);
    }

    #[rstest]
    fn unit_variant_focuses_on_unit() {
        let variant: Variant = syn::parse_quote!(Empty);
        let generated = generate_variant_prism(&variant).to_string();
        assert!(generated.contains("empty_prism"));
        assert!(generated.contains("Prism < Self , () >"));
    }

    #[rstest]
    fn generic_parameters_gain_a_clone_bound() {
        let input: DeriveInput = syn::parse_quote! {
            enum Outcome<T> { Success(T), Failure }
        };
        let Data::Enum(data) = &input.data else {
            panic!("expected an enum");
        };
        let variants: Vec<&Variant> = data.variants.iter().collect();
        let generated = generate_enum_prisms(&input.ident, &input.generics, &variants).to_string();
        assert!(generated.contains("T : :: core :: clone :: Clone"));
    }

    #[rstest]
    fn struct_variant_focuses_on_a_tuple() {
        let variant: Variant = syn::parse_quote!(Click { x: i32, y: i32 });
        let generated = generate_variant_prism(&variant).to_string();
        assert!(generated.contains("click_prism"));
        assert!(generated.contains("Prism < Self , (i32 , i32) >"));
    }
}
