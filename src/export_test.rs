use base64::Engine as _;

use super::*;

// Base64 of the 8-byte PNG file signature plus the first bytes of an
// IHDR length field — enough to check real decoding.
const PNG_SIGNATURE_B64: &str = "iVBORw0KGgo=";
const PNG_SIGNATURE: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

// =============================================================
// decode_data_url
// =============================================================

#[test]
fn decodes_mime_and_payload() {
    let url = format!("data:image/png;base64,{PNG_SIGNATURE_B64}");
    let decoded = decode_data_url(&url).unwrap();
    assert_eq!(decoded.mime, "image/png");
    assert_eq!(&decoded.bytes[..8], &PNG_SIGNATURE);
}

#[test]
fn decodes_jpeg_mime() {
    let decoded = decode_data_url("data:image/jpeg;base64,AAEC").unwrap();
    assert_eq!(decoded.mime, "image/jpeg");
    assert_eq!(decoded.bytes, vec![0x00, 0x01, 0x02]);
}

#[test]
fn rejects_missing_scheme() {
    let err = decode_data_url("image/png;base64,AAEC").unwrap_err();
    assert!(err.to_string().contains("missing data: scheme"));
}

#[test]
fn rejects_missing_separator() {
    let err = decode_data_url("data:image/png;base64").unwrap_err();
    assert!(err.to_string().contains("missing payload separator"));
}

#[test]
fn rejects_missing_base64_marker() {
    let err = decode_data_url("data:image/png,rawbytes").unwrap_err();
    assert!(err.to_string().contains("missing base64 marker"));
}

#[test]
fn rejects_invalid_base64() {
    let err = decode_data_url("data:image/png;base64,!!!!").unwrap_err();
    assert!(err.to_string().contains("invalid base64 payload"));
}

#[test]
fn roundtrips_through_encoding() {
    let bytes: Vec<u8> = (0u8..64).collect();
    let url = format!("data:image/png;base64,{}", BASE64.encode(&bytes));
    let decoded = decode_data_url(&url).unwrap();
    assert_eq!(decoded.bytes, bytes);
}

// =============================================================
// attachment_url — bit-exact substitution
// =============================================================

#[test]
fn rewrites_png_mime_segment() {
    let url = format!("data:image/png;base64,{PNG_SIGNATURE_B64}");
    let rewritten = attachment_url(&url);
    assert_eq!(
        rewritten,
        format!(
            "data:image/octet-stream;Content-Disposition:attachment;filename=sign.png;base64,{PNG_SIGNATURE_B64}"
        )
    );
}

#[test]
fn payload_is_untouched_by_rewrite() {
    let url = format!("data:image/png;base64,{PNG_SIGNATURE_B64}");
    let rewritten = attachment_url(&url);
    assert!(rewritten.ends_with(PNG_SIGNATURE_B64));
}

#[test]
fn non_png_urls_pass_through() {
    let url = "data:image/jpeg;base64,AAEC";
    assert_eq!(attachment_url(url), url);
}

#[test]
fn only_first_occurrence_is_replaced() {
    let url = "data:image/png;base64,image/png";
    let rewritten = attachment_url(url);
    assert!(rewritten.ends_with("base64,image/png"));
}
