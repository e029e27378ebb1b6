//! # vela-store: Session State for Vela POS
//!
//! One authenticated session's view of the shop: the catalog, the
//! in-progress cart, and the sales ledger, owned together behind a single
//! mutex and mutated only through the operations defined here.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                      State Architecture                         │
//! │                                                                 │
//! │  Renderer / embedding app                                       │
//! │        │  operations + snapshot reads                           │
//! │        ▼                                                        │
//! │  ┌────────────────────────────────────────────────────┐         │
//! │  │  StoreState              Arc<Mutex<SessionStore>>  │         │
//! │  │  ┌──────────────────────────────────────────────┐  │         │
//! │  │  │  SessionStore                                │  │         │
//! │  │  │   session   (who is acting, permissions)     │  │         │
//! │  │  │   catalog   (vela-core)                      │  │         │
//! │  │  │   cart      (vela-core)                      │  │         │
//! │  │  │   ledger    (vela-core)                      │  │         │
//! │  │  └──────────────────────────────────────────────┘  │         │
//! │  └────────────────────────────────────────────────────┘         │
//! │                                                                 │
//! │  ONE mutex over the whole triple: no concurrent checkout can    │
//! │  interleave with a stock decrement or a cart mutation.          │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`session`] - The authenticated session and its permission set
//! - [`error`] - Serializable `{code, message}` errors for a renderer
//! - [`store`] - `SessionStore` operations and the `StoreState` wrapper
//! - [`seed`] - Demo catalog and ledger data

pub mod error;
pub mod seed;
pub mod session;
pub mod store;

pub use error::{ErrorCode, StoreError, StoreResult};
pub use session::{Permission, Session};
pub use store::{DashboardSummary, SessionStore, StoreState};
