//! voxledger-core: Core types for the voice-transaction parser

pub mod draft;

pub use draft::{
    CONFIDENCE_AMOUNT_FOUND, CONFIDENCE_NO_AMOUNT, TransactionDraft, TransactionKind,
    confidence_for_amount,
};
