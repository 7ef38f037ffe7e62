use proc_macro2::TokenStream;
use quote::quote;
use syn::{Ident, ItemFn, ReturnType, spanned::Spanned};

pub fn expand_case(attr: TokenStream, item: TokenStream) -> syn::Result<TokenStream> {
	if !attr.is_empty() {
		// the kind tag only has to be a single identifier
		syn::parse2::<Ident>(attr)?;
	}

	let function: ItemFn = syn::parse2(item)?;
	let signature = &function.sig;

	if !signature.inputs.is_empty() {
		return Err(syn::Error::new(
			signature.inputs.span(),
			"munit_case functions take no arguments",
		));
	}
	if !signature.generics.params.is_empty() {
		return Err(syn::Error::new(
			signature.generics.span(),
			"munit_case functions cannot be generic",
		));
	}
	if let Some(asyncness) = &signature.asyncness {
		return Err(syn::Error::new(asyncness.span(), "munit_case functions cannot be async"));
	}
	if let ReturnType::Type(_, ty) = &signature.output {
		return Err(syn::Error::new(ty.span(), "munit_case functions return nothing"));
	}

	let attrs = &function.attrs;
	let vis = &function.vis;
	let name = &signature.ident;
	let body = &function.block;

	Ok(quote! {
		#(#attrs)*
		#[allow(unreachable_code)]
		#vis fn #name(
			_params: &[::munit_compat::core::Parameter],
			_user_data: &mut dyn ::std::any::Any,
		) -> ::munit_compat::core::TestResult {
			#body;
			::munit_compat::core::TestResult::Ok
		}
	})
}
