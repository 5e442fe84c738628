use darling::FromAttributes;
use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Error, Fields, Result};

/// Attribute arguments for #[symbolic(...)] on a variant
#[derive(FromAttributes, Debug, Default)]
#[darling(attributes(symbolic))]
struct VariantOpts {
    #[darling(default)]
    label: Option<String>,
}

struct VariantImpl {
    ident: syn::Ident,
    canonical: String,
    label: Option<String>,
}

/// Expands `#[derive(Symbolic)]`
pub(crate) fn expand_derive_symbolic(input: DeriveInput) -> Result<TokenStream> {
    let name = &input.ident;

    let enum_data = match &input.data {
        Data::Enum(enum_data) => enum_data,
        _ => {
            return Err(Error::new_spanned(
                &input.ident,
                "Symbolic can only be derived for enums",
            ))
        }
    };

    if !input.generics.params.is_empty() {
        return Err(Error::new_spanned(
            &input.generics,
            "Symbolic enums cannot be generic",
        ));
    }

    if enum_data.variants.is_empty() {
        return Err(Error::new_spanned(
            &input.ident,
            "Symbolic enums need at least one variant",
        ));
    }

    let mut variants: Vec<VariantImpl> = Vec::with_capacity(enum_data.variants.len());
    for variant in &enum_data.variants {
        if !matches!(variant.fields, Fields::Unit) {
            return Err(Error::new_spanned(
                variant,
                "Symbolic variants cannot carry data",
            ));
        }

        let opts = VariantOpts::from_attributes(&variant.attrs)
            .map_err(|e| Error::new_spanned(variant, e.to_string()))?;
        let canonical = variant.ident.to_string();

        // Decoding is case-insensitive, so names may not collide ignoring case.
        if let Some(existing) = variants
            .iter()
            .find(|v| v.canonical.eq_ignore_ascii_case(&canonical))
        {
            return Err(Error::new_spanned(
                &variant.ident,
                format!(
                    "variant `{}` collides with `{}` when compared case-insensitively",
                    canonical, existing.canonical
                ),
            ));
        }

        variants.push(VariantImpl {
            ident: variant.ident.clone(),
            canonical,
            label: opts.label,
        });
    }

    let type_name = name.to_string();

    let table_entries = variants.iter().map(|v| {
        let ident = &v.ident;
        let canonical = &v.canonical;
        let label = match &v.label {
            Some(label) => quote!(::core::option::Option::Some(#label)),
            None => quote!(::core::option::Option::None),
        };
        quote! {
            ::brewlog_codec::VariantDef::new(#name::#ident as i64, #canonical, #label)
        }
    });

    let from_ordinal_arms = variants.iter().map(|v| {
        let ident = &v.ident;
        quote! {
            if ordinal == #name::#ident as i64 {
                return ::core::option::Option::Some(#name::#ident);
            }
        }
    });

    let name_arms = variants.iter().map(|v| {
        let ident = &v.ident;
        let canonical = &v.canonical;
        quote!(#name::#ident => #canonical,)
    });

    Ok(quote! {
        impl ::brewlog_codec::Symbolic for #name {
            const TYPE_NAME: &'static str = #type_name;
            const VARIANTS: &'static [::brewlog_codec::VariantDef] = &[#(#table_entries),*];

            #[inline]
            fn ordinal(self) -> i64 {
                self as i64
            }

            fn from_ordinal(ordinal: i64) -> ::core::option::Option<Self> {
                #(#from_ordinal_arms)*
                ::core::option::Option::None
            }

            #[inline]
            fn name(self) -> &'static str {
                match self {
                    #(#name_arms)*
                }
            }
        }

        impl ::core::fmt::Display for #name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(::brewlog_codec::encode(*self))
            }
        }

        impl ::core::str::FromStr for #name {
            type Err = ::brewlog_codec::SymbolicError;

            fn from_str(s: &str) -> ::core::result::Result<Self, Self::Err> {
                ::brewlog_codec::parse::<#name>(s)
            }
        }

        impl ::brewlog_codec::__private::serde::Serialize for #name {
            fn serialize<S>(&self, serializer: S) -> ::core::result::Result<S::Ok, S::Error>
            where
                S: ::brewlog_codec::__private::serde::Serializer,
            {
                ::brewlog_codec::wire::serialize(self, serializer)
            }
        }

        impl<'de> ::brewlog_codec::__private::serde::Deserialize<'de> for #name {
            fn deserialize<D>(deserializer: D) -> ::core::result::Result<Self, D::Error>
            where
                D: ::brewlog_codec::__private::serde::Deserializer<'de>,
            {
                ::brewlog_codec::wire::deserialize(deserializer)
            }
        }
    })
}
