//! ReCircuit Core - Shared types library.
//!
//! This crate provides common types used across all ReCircuit components:
//! - `storefront` - JSON API server for the refurbished-electronics store
//! - `client` - Typed HTTP client and cart persistence
//!
//! # Architecture
//!
//! The core crate contains only types and pure logic - no I/O, no HTTP, no
//! storage access. This keeps it lightweight and allows it to be used
//! anywhere, including in the client.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, money, phone numbers,
//!   and statuses
//! - [`catalog`] - Product entity
//! - [`user`] - User entity
//! - [`order`] - Order entities
//! - [`cart`] - Client-side cart state container
//! - [`api`] - Request/response contracts shared by server and client

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod cart;
pub mod catalog;
pub mod order;
pub mod types;
pub mod user;

pub use api::{CreateOrderRequest, ErrorBody, LoginRequest, ProductFilter, RegisterRequest};
pub use cart::{Cart, CartItem};
pub use catalog::Product;
pub use order::{Order, OrderItem};
pub use types::*;
pub use user::User;
