//! Domain layer modules
//!
//! This module contains business domain logic:
//! - `discount`: Discount statistics over product lists
//! - `shop`: Storefront records (products, collections, store)
//! - `template`: Meta template language, variables and storage

pub mod discount;
pub mod shop;
pub mod template;
