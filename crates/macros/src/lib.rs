// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! *Part of the wider Lane Timeline project*
//!
//! This crate contains the Lane Timeline procedural macros
//!

extern crate proc_macro;

use proc_macro::TokenStream;
use quote::quote;
use syn::{LitInt, parse_macro_input};

// TODO: these are copied from `lane-timeline-core` (so are not synced)
const MAX_DAY: i64 = 36_600;
const MAX_TIME_OF_DAY: i64 = 1439;
const MAX_DURATION: i64 = u32::MAX as i64;
const MAX_ZOOM_LEVEL: i64 = u32::MAX as i64;

/// Generate the type with compile time bounds checking
fn generate_const_checked_integer_macro(
    input: TokenStream,
    type_name: &str,
    min: i64,
    max: i64,
) -> TokenStream {
    let lit = parse_macro_input!(input as LitInt);

    let value = match lit.base10_parse::<i64>() {
        Ok(v) => v,
        Err(_) => {
            return syn::Error::new_spanned(lit, "Expected a valid i64 integer literal")
                .to_compile_error()
                .into();
        }
    };

    if value < min || value > max {
        return syn::Error::new_spanned(
            lit,
            format!("{type_name} must be between {min} and {max}"),
        )
        .to_compile_error()
        .into();
    }

    let ident = syn::Ident::new(type_name, proc_macro2::Span::call_site());
    quote! {
        #ident::try_from(#value).unwrap()
    }
    .into()
}

/// Create a `DayIndex`, using `day!(x)`, with compile time checking of the
/// value.
#[proc_macro]
pub fn day(input: TokenStream) -> TokenStream {
    generate_const_checked_integer_macro(input, "DayIndex", 0, MAX_DAY)
}

/// Create a `TimeOfDay`, using `time_of_day!(x)`, with compile time checking of
/// the value (minutes since the start of the day).
#[proc_macro]
pub fn time_of_day(input: TokenStream) -> TokenStream {
    generate_const_checked_integer_macro(input, "TimeOfDay", 0, MAX_TIME_OF_DAY)
}

/// Create a `Duration`, using `duration!(x)`, with compile time checking of the
/// value (minutes).
#[proc_macro]
pub fn duration(input: TokenStream) -> TokenStream {
    generate_const_checked_integer_macro(input, "Duration", 1, MAX_DURATION)
}

/// Create a `ZoomLevel`, using `zoom!(x)`, with compile time checking of the
/// value (minutes per grid unit).
#[proc_macro]
pub fn zoom(input: TokenStream) -> TokenStream {
    generate_const_checked_integer_macro(input, "ZoomLevel", 1, MAX_ZOOM_LEVEL)
}
