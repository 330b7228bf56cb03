use proc_macro::TokenStream;
use quote::quote;
use syn::parse::Parser;

/// The largest number of channels any colorspace declares.
const MAX_CHANNELS: usize = 4;

#[proc_macro]
pub fn gen_model(input: TokenStream) -> TokenStream {
    let mut input = syn::parse_macro_input!(input as syn::ItemStruct);

    if !matches!(input.fields, syn::Fields::Named(_)) {
        return quote! {
            compile_error!("Models must use named fields, one for each channel of the colorspace.")
        }
        .into();
    }

    if input.fields.is_empty() || input.fields.len() > MAX_CHANNELS {
        return quote! {
            compile_error!("Models must have between 1 and 4 fields, one for each channel of the colorspace.")
        }
        .into();
    }

    if !input.generics.params.is_empty() {
        return quote! {
            compile_error!("Models can not be generic, each one maps to a single colorspace.")
        }
        .into();
    }

    let field_names = input
        .fields
        .iter()
        .map(|f| f.ident.clone())
        .collect::<Vec<_>>();
    let field_types = input.fields.iter().map(|f| f.ty.clone()).collect::<Vec<_>>();
    let indices = (0..field_names.len()).collect::<Vec<_>>();

    // Channels are always reachable on a model.
    input.fields.iter_mut().for_each(|f| {
        f.vis = syn::Visibility::Public(Default::default());
    });

    let attr = syn::Attribute::parse_outer
        .parse2(quote! {
            #[derive(Clone, Copy, Debug, PartialEq)]
        })
        .expect("derive attribute is well formed");
    input.attrs.extend(attr);

    let struct_name = input.ident.clone();

    let model_impl = quote! {
        impl #struct_name {
            /// Create a new model from its channel values.
            pub const fn new(#(#field_names: #field_types),*) -> Self {
                Self {
                    #(#field_names,)*
                }
            }
        }

        impl From<crate::color::Channels> for #struct_name {
            fn from(value: crate::color::Channels) -> Self {
                Self::new(#(value[#indices]),*)
            }
        }

        impl crate::models::Model for #struct_name {
            fn to_channels(&self) -> crate::color::Channels {
                crate::color::Channels::from_array([#(self.#field_names),*])
            }
        }
    };

    quote! {
        #input
        #model_impl
    }
    .into()
}
