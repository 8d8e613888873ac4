//! `Identifiable` derive macro.

use proc_macro::TokenStream;
use quote::quote;
use syn::{DeriveInput, LitInt, LitStr, parse_macro_input};

struct RttiAttrs {
	name: Option<LitStr>,
	ordinal: Option<LitInt>,
}

fn parse_attrs(input: &DeriveInput) -> syn::Result<RttiAttrs> {
	let mut attrs = RttiAttrs {
		name: None,
		ordinal: None,
	};

	for attr in &input.attrs {
		if !attr.path().is_ident("rtti") {
			continue;
		}
		attr.parse_nested_meta(|meta| {
			if meta.path.is_ident("name") {
				let lit: LitStr = meta.value()?.parse()?;
				if lit.value().is_empty() {
					return Err(syn::Error::new_spanned(&lit, "rtti name must not be empty"));
				}
				attrs.name = Some(lit);
				Ok(())
			} else if meta.path.is_ident("ordinal") {
				let lit: LitInt = meta.value()?.parse()?;
				lit.base10_parse::<i32>()?;
				attrs.ordinal = Some(lit);
				Ok(())
			} else {
				Err(meta.error("unknown rtti attribute; expected `name` or `ordinal`"))
			}
		})?;
	}

	Ok(attrs)
}

pub fn derive_identifiable(input: TokenStream) -> TokenStream {
	let input = parse_macro_input!(input as DeriveInput);
	let ident = &input.ident;

	if !input.generics.params.is_empty() {
		return syn::Error::new_spanned(
			&input.generics,
			"Identifiable cannot be derived for generic types; register each instantiation with TypeRegistry::create_type_id_of",
		)
		.to_compile_error()
		.into();
	}

	let attrs = match parse_attrs(&input) {
		Ok(attrs) => attrs,
		Err(e) => return e.to_compile_error().into(),
	};

	let name = attrs
		.name
		.unwrap_or_else(|| LitStr::new(&ident.to_string(), ident.span()));
	let ordinal: proc_macro2::TokenStream = match attrs.ordinal {
		Some(lit) => quote! { #lit },
		None => quote! { 0 },
	};

	quote! {
		const _: () = {
			static __RTTI_SLOT: ::rtti::TypeSlot = ::rtti::TypeSlot::new();

			impl ::rtti::Identifiable for #ident {
				const NAME: &'static str = #name;

				#[inline]
				fn type_slot() -> &'static ::rtti::TypeSlot {
					&__RTTI_SLOT
				}
			}

			impl ::rtti::Identify for #ident {
				#[inline]
				fn type_ref(&self) -> ::std::option::Option<&'static ::rtti::TypeRef> {
					<Self as ::rtti::Identifiable>::type_descriptor()
				}
			}

			::rtti::inventory::submit! {
				::rtti::Registration::new::<#ident>(#name, #ordinal, &__RTTI_SLOT)
			}
		};
	}
	.into()
}
