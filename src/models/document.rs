//! Document descriptor and the invoice it belongs to.

use serde::Deserialize;
use serde_json::Value;

use crate::core::error::DescriptorError;
use crate::core::share::{SaveRequest, SharePayload, ShareRequest};

/// Immutable reference to a retrievable document.
///
/// Only points at the bytes; rendering is left to the host's native viewer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocumentDescriptor {
    /// File name used for display and as the suggested download name.
    pub filename: String,
    /// Locator for the document bytes. Opaque to the preview.
    pub retrieval_url: String,
    pub size_bytes: u64,
    /// Zero means unknown or empty.
    pub page_count: u32,
}

/// An invoice document as shown in the conversation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InvoiceDocument {
    pub invoice_number: String,
    pub customer_name: String,
    pub descriptor: DocumentDescriptor,
}

/// Shape of the `create_invoice` tool result. Fields the preview does not
/// use (line items, totals, dates) are ignored.
#[derive(Deserialize)]
struct RawInvoice {
    invoice_number: String,
    customer: RawCustomer,
    pdf: Option<RawAttachment>,
}

#[derive(Deserialize)]
struct RawCustomer {
    name: String,
}

#[derive(Deserialize)]
struct RawAttachment {
    filename: String,
    size: u64,
    pages: u32,
    url: String,
}

impl InvoiceDocument {
    /// Resolve an invoice document from a tool result.
    ///
    /// Origin-relative attachment URLs are prefixed with `base_url`.
    /// Any missing or mistyped field is an error; nothing is defaulted.
    pub fn resolve(result: Option<&Value>, base_url: &str) -> Result<Self, DescriptorError> {
        let result = match result {
            None | Some(Value::Null) => return Err(DescriptorError::Absent),
            Some(value) => value,
        };

        let raw = RawInvoice::deserialize(result)
            .map_err(|e| DescriptorError::Malformed(e.to_string()))?;
        let pdf = raw.pdf.ok_or(DescriptorError::MissingAttachment)?;
        if pdf.filename.trim().is_empty() {
            return Err(DescriptorError::EmptyFilename);
        }

        Ok(Self {
            invoice_number: raw.invoice_number,
            customer_name: raw.customer.name,
            descriptor: DocumentDescriptor {
                filename: pdf.filename,
                retrieval_url: resolve_url(base_url, &pdf.url),
                size_bytes: pdf.size,
                page_count: pdf.pages,
            },
        })
    }

    /// Display title, e.g. "Invoice INV-20250101-AB12".
    pub fn title(&self) -> String {
        format!("Invoice {}", self.invoice_number)
    }

    pub fn save_request(&self) -> SaveRequest {
        SaveRequest {
            url: self.descriptor.retrieval_url.clone(),
            filename: self.descriptor.filename.clone(),
        }
    }

    pub fn share_request(&self) -> ShareRequest {
        ShareRequest {
            payload: SharePayload {
                title: self.title(),
                text: format!("Invoice for {}", self.customer_name),
                url: self.descriptor.retrieval_url.clone(),
            },
            fallback: self.save_request(),
        }
    }
}

/// Prefix origin-relative `url` with `base_url`; pass anything else through.
fn resolve_url(base_url: &str, url: &str) -> String {
    if url.starts_with('/') {
        format!("{}{}", base_url.trim_end_matches('/'), url)
    } else {
        url.to_string()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    const BASE: &str = "http://localhost:8000";

    fn tool_result() -> Value {
        json!({
            "invoice_number": "INV-20250101-AB12",
            "invoice_date": "2025-01-01",
            "due_date": "2025-01-31",
            "customer": { "name": "Acme BV", "email": "billing@acme.test" },
            "items": [{ "description": "Consulting", "amount": 1000.0 }],
            "subtotal": 1000.0,
            "tax_rate": 0.21,
            "tax_amount": 210.0,
            "total_amount": 1210.0,
            "currency": "EUR",
            "status": "draft",
            "pdf": {
                "filename": "Invoice-INV-20250101-AB12.pdf",
                "filepath": "/srv/invoices/Invoice-INV-20250101-AB12.pdf",
                "size": 204800,
                "pages": 2,
                "url": "/invoices/Invoice-INV-20250101-AB12.pdf"
            }
        })
    }

    #[test]
    fn test_resolve_full_result() {
        let doc = InvoiceDocument::resolve(Some(&tool_result()), BASE).unwrap();
        assert_eq!(doc.invoice_number, "INV-20250101-AB12");
        assert_eq!(doc.customer_name, "Acme BV");
        assert_eq!(
            doc.descriptor,
            DocumentDescriptor {
                filename: "Invoice-INV-20250101-AB12.pdf".to_string(),
                retrieval_url: "http://localhost:8000/invoices/Invoice-INV-20250101-AB12.pdf"
                    .to_string(),
                size_bytes: 204800,
                page_count: 2,
            }
        );
    }

    #[test]
    fn test_resolve_absent() {
        assert_eq!(
            InvoiceDocument::resolve(None, BASE),
            Err(DescriptorError::Absent)
        );
        assert_eq!(
            InvoiceDocument::resolve(Some(&Value::Null), BASE),
            Err(DescriptorError::Absent)
        );
    }

    #[test]
    fn test_resolve_missing_attachment() {
        let mut result = tool_result();
        result.as_object_mut().unwrap().remove("pdf");
        assert_eq!(
            InvoiceDocument::resolve(Some(&result), BASE),
            Err(DescriptorError::MissingAttachment)
        );

        result["pdf"] = Value::Null;
        assert_eq!(
            InvoiceDocument::resolve(Some(&result), BASE),
            Err(DescriptorError::MissingAttachment)
        );
    }

    #[test]
    fn test_resolve_partial_attachment() {
        let mut result = tool_result();
        result["pdf"].as_object_mut().unwrap().remove("pages");
        assert!(matches!(
            InvoiceDocument::resolve(Some(&result), BASE),
            Err(DescriptorError::Malformed(_))
        ));
    }

    #[test]
    fn test_resolve_negative_size() {
        let mut result = tool_result();
        result["pdf"]["size"] = json!(-1);
        assert!(matches!(
            InvoiceDocument::resolve(Some(&result), BASE),
            Err(DescriptorError::Malformed(_))
        ));
    }

    #[test]
    fn test_resolve_empty_filename() {
        let mut result = tool_result();
        result["pdf"]["filename"] = json!("");
        assert_eq!(
            InvoiceDocument::resolve(Some(&result), BASE),
            Err(DescriptorError::EmptyFilename)
        );
    }

    #[test]
    fn test_resolve_not_an_object() {
        assert!(matches!(
            InvoiceDocument::resolve(Some(&json!("oops")), BASE),
            Err(DescriptorError::Malformed(_))
        ));
    }

    #[test]
    fn test_zero_pages_is_valid() {
        let mut result = tool_result();
        result["pdf"]["pages"] = json!(0);
        let doc = InvoiceDocument::resolve(Some(&result), BASE).unwrap();
        assert_eq!(doc.descriptor.page_count, 0);
    }

    #[test]
    fn test_resolve_url() {
        assert_eq!(
            resolve_url("http://localhost:8000/", "/files/042"),
            "http://localhost:8000/files/042"
        );
        assert_eq!(
            resolve_url(BASE, "https://cdn.example.com/042.pdf"),
            "https://cdn.example.com/042.pdf"
        );
        assert_eq!(resolve_url(BASE, "files/042"), "files/042");
    }

    #[test]
    fn test_share_request() {
        let doc = InvoiceDocument::resolve(Some(&tool_result()), BASE).unwrap();
        let request = doc.share_request();
        assert_eq!(request.payload.title, "Invoice INV-20250101-AB12");
        assert_eq!(request.payload.text, "Invoice for Acme BV");
        assert_eq!(request.payload.url, doc.descriptor.retrieval_url);
        assert_eq!(request.fallback, doc.save_request());
    }
}
