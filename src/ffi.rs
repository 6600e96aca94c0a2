//! FFI Layer
//!
//! All C-ABI exports are defined here. Every function follows the same
//! pattern:
//! - Input: JSON signing request plus a hex private key (null-terminated C strings)
//! - Output: JSON string (must be freed with `cosmos_signer_free_string`)
//!
//! Error handling: the response carries a `success` flag. On error,
//! `success: false` and the `error` object is populated.

use std::ffi::{CStr, CString};
use std::os::raw::c_char;

use crate::error::{SignerError, SignerResult};
use crate::keys::PrivateKeyBytes;
use crate::signer::Signer;
use crate::types::{ApiResponse, SigningInput};

// =============================================================================
// Memory Management
// =============================================================================

/// Free a string returned by any cosmos_signer_* function
///
/// # Safety
/// The pointer must have been returned by a cosmos_signer_* function
#[unsafe(no_mangle)]
pub extern "C" fn cosmos_signer_free_string(s: *mut c_char) {
    if s.is_null() {
        return;
    }
    unsafe {
        let _ = CString::from_raw(s);
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Borrow a C string as UTF-8
fn parse_input<'a>(input: *const c_char, what: &str) -> SignerResult<&'a str> {
    if input.is_null() {
        return Err(SignerError::invalid_input(format!("Null {} pointer", what)));
    }

    let c_str = unsafe { CStr::from_ptr(input) };
    c_str
        .to_str()
        .map_err(|_| SignerError::invalid_input(format!("Invalid UTF-8 in {}", what)))
}

fn parse_request(input_json: *const c_char, private_key_hex: *const c_char) -> SignerResult<SigningInput> {
    let json = parse_input(input_json, "input")?;
    let key_hex = parse_input(private_key_hex, "private key")?;
    let key = PrivateKeyBytes::from_hex(key_hex)?;
    Ok(SigningInput::from_json(json)?.with_private_key(key))
}

/// Create a response JSON string
fn respond<T: serde::Serialize>(result: SignerResult<T>) -> *mut c_char {
    let body = match result {
        Ok(data) => ApiResponse::ok(data).to_json(),
        Err(e) => ApiResponse::<()>::err(e).to_json(),
    };
    string_to_ptr(body)
}

/// Convert Rust string to C string pointer
fn string_to_ptr(s: String) -> *mut c_char {
    match CString::new(s) {
        Ok(c_str) => c_str.into_raw(),
        Err(_) => {
            // Last resort: return a minimal error
            let fallback = r#"{"success":false,"data":null,"error":{"code":"internal","message":"String conversion failed","details":null}}"#;
            CString::new(fallback).map_or(std::ptr::null_mut(), CString::into_raw)
        }
    }
}

// =============================================================================
// Signing
// =============================================================================

/// Sign a transaction
///
/// # Output
/// ```json
/// {
///   "success": true,
///   "data": {
///     "signature": "<hex>",
///     "json": "",
///     "serialized": "<hex>",
///     "serialized_base64": "<base64>"
///   }
/// }
/// ```
#[unsafe(no_mangle)]
pub extern "C" fn cosmos_signer_sign(
    input_json: *const c_char,
    private_key_hex: *const c_char,
) -> *mut c_char {
    respond(parse_request(input_json, private_key_hex).and_then(|input| Signer::sign(&input)))
}

/// Sign a transaction and return only the signed legacy JSON document
#[unsafe(no_mangle)]
pub extern "C" fn cosmos_signer_sign_json(
    input_json: *const c_char,
    private_key_hex: *const c_char,
) -> *mut c_char {
    respond(
        parse_request(input_json, private_key_hex)
            .and_then(|input| Signer::sign(&input))
            .map(|output| output.json),
    )
}
