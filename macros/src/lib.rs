//! Code generation for the `contuple` crate.
//!
//! Both macros take a single integer literal and expand to one item (or one
//! block of impls) per index/arity in the range. They emit unqualified names
//! (`Here`, `There`, `ConsTuple`, `EmptyTuple`, `IntoNative`) and rely on the
//! invocation site to have them in scope.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{parse_macro_input, LitInt};

/// Expands `index_types!(N)` to `pub type I0 = Here;` up to
/// `pub type I{N-1} = There<I{N-2}>;`.
#[proc_macro]
pub fn index_types(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let lit = parse_macro_input!(input as LitInt);
    let count: usize = match lit.base10_parse() {
        Ok(count) => count,
        Err(err) => return err.to_compile_error().into(),
    };
    let mut output = TokenStream::new();
    for i in 0..count {
        let name = format_ident!("I{}", i);
        let doc = format!("Type-level index {i}.");
        let alias = if i == 0 {
            quote!(Here)
        } else {
            let prev = format_ident!("I{}", i - 1);
            quote!(There<#prev>)
        };
        output.extend(quote! {
            #[doc = #doc]
            pub type #name = #alias;
        });
    }
    output.into()
}

/// Expands `impl_native_conversions!(N)` to `From<(T0, ...)>` and
/// `IntoNative` impls for every arity in `0..=N`.
#[proc_macro]
pub fn impl_native_conversions(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let lit = parse_macro_input!(input as LitInt);
    let max: usize = match lit.base10_parse() {
        Ok(max) => max,
        Err(err) => return err.to_compile_error().into(),
    };
    let mut output = TokenStream::new();
    for arity in 0..=max {
        if arity == 0 {
            output.extend(quote! {
                impl From<()> for EmptyTuple {
                    fn from(_: ()) -> Self {
                        EmptyTuple
                    }
                }

                impl IntoNative for EmptyTuple {
                    type Native = ();

                    fn into_native(self) -> Self::Native {}
                }
            });
            continue;
        }
        let params: Vec<_> = (0..arity).map(|i| format_ident!("T{}", i)).collect();
        let binds: Vec<_> = (0..arity).map(|i| format_ident!("v{}", i)).collect();
        let mut cons_ty = quote!(EmptyTuple);
        let mut cons_pat = quote!(EmptyTuple);
        let mut cons_expr = quote!(EmptyTuple);
        for i in (0..arity).rev() {
            let param = &params[i];
            let bind = &binds[i];
            let field = syn::Index::from(i);
            cons_ty = quote!(ConsTuple<#param, #cons_ty>);
            cons_pat = quote!(ConsTuple { head: #bind, tail: #cons_pat });
            cons_expr = quote!(ConsTuple { head: value.#field, tail: #cons_expr });
        }
        output.extend(quote! {
            impl<#(#params),*> From<(#(#params,)*)> for #cons_ty {
                fn from(value: (#(#params,)*)) -> Self {
                    #cons_expr
                }
            }

            impl<#(#params),*> IntoNative for #cons_ty {
                type Native = (#(#params,)*);

                fn into_native(self) -> Self::Native {
                    let #cons_pat = self;
                    (#(#binds,)*)
                }
            }
        });
    }
    output.into()
}
