//! Fixed-layout invoice print forms.
//!
//! A [`BaseForm`] owns one single-page document with the letterhead,
//! footer and address-window images already placed. [`InvoiceForm`]
//! draws the fields of an [`InvoiceFormData`] record at the positions of
//! an [`InvoiceLayout`]; the record itself is produced from domain data
//! by [`InvoiceFormDataMapper`].
//!
//! Call [`setup_i18n`] once before building mappers so locale
//! resolution is settled for the whole process.

pub mod base_form;
pub mod config;
pub mod domain;
pub mod error;
pub mod form_options;
pub mod i18n;
pub mod invoice_form;
pub mod invoice_form_data;
pub mod invoice_form_data_mapper;
pub mod layout;

pub use base_form::{BaseForm, DocumentInfo};
pub use config::{FormConfig, MapperSettings};
pub use domain::{DateUtility, InvoiceData, ReceiverData};
pub use error::{DomainError, FormError, I18nError};
pub use form_options::FormOptions;
pub use i18n::{setup_i18n, CurrencyFormat, DateFormat, LocaleResolution, NumberFormat};
pub use invoice_form::InvoiceForm;
pub use invoice_form_data::{InvoiceFormData, InvoiceItemFormData};
pub use invoice_form_data_mapper::InvoiceFormDataMapper;
pub use layout::{InvoiceLayout, PageTemplate, STANDARD_PAGE};
