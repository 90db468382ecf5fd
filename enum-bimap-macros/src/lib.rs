use proc_macro::TokenStream;
use quote::quote;
use syn;

/// Derives `UnitEnum` for an enum whose variants are all unit variants,
/// listing every variant in declaration order.
#[proc_macro_derive(UnitEnum)]
pub fn derive_unit_enum(input: TokenStream) -> TokenStream {
    let ast = syn::parse::<syn::DeriveInput>(input).unwrap();
    let name = &ast.ident;
    let variants = match &ast.data {
        syn::Data::Enum(data_enum) => &data_enum.variants,
        _ => {
            return syn::Error::new_spanned(&ast.ident, "UnitEnum can only be derived for enums")
                .to_compile_error()
                .into();
        }
    };
    for variant in variants {
        match &variant.fields {
            syn::Fields::Unit => {}
            _ => {
                return syn::Error::new_spanned(
                    &variant.ident,
                    "UnitEnum variants must not carry data",
                )
                .to_compile_error()
                .into();
            }
        }
    }
    let variant_names = variants.iter().map(|variant| &variant.ident);
    let impl_block = quote! {
        impl enum_bimap::UnitEnum for #name {
            const VARIANTS: &'static [Self] = &[#(#name::#variant_names),*];
        }
    };
    impl_block.into()
}
