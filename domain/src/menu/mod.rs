//! Weekly menu generation domain.
//!
//! Generation is a linear pipeline with no backtracking:
//!
//! 1. **Validate** — [`quota::QuotaRequest::validate`] checks the quota cap and
//!    day count before any catalog read
//! 2. **Category fill** — [`draft::MenuDraft::fill_category`] draws up to the
//!    requested count from each category
//! 3. **Random fill** — [`draft::MenuDraft::fill_random`] tops the draft up
//!    from the whole catalog
//! 4. **Finalize** — [`draft::MenuDraft::finalize`] reshuffles and truncates
//!
//! The catalog reads between steps are done by the application layer; the
//! types here are pure and take the randomness source as a parameter.

pub mod draft;
pub mod phase;
pub mod quota;
pub mod result;

pub use draft::MenuDraft;
pub use phase::MenuPhase;
pub use quota::{DEFAULT_MENU_DAYS, MAX_QUOTA_TOTAL, MenuPlan, QuotaRequest};
pub use result::{MenuResult, MenuSummary};
