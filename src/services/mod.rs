//! Per-service statement providers.
//!
//! Each module carries one service's static catalog (actions with access
//! levels, resource-type templates) and a provider type whose methods map
//! one-to-one onto the service's API actions (`to_*`), addressable
//! resource types (`on_*`), and service-specific condition keys (`if_*`).
//! Every method is a one-line call into the shared [Statement] engine.
//!
//! [Statement]: crate::Statement

mod redshift;
mod ssm_guiconnect;

pub use {
    redshift::{Redshift, REDSHIFT},
    ssm_guiconnect::{SsmGuiconnect, SSM_GUICONNECT},
};

use crate::ServiceTable;

/// Every service table compiled into this crate, in prefix order.
pub(crate) static ALL: &[&ServiceTable] = &[&REDSHIFT, &SSM_GUICONNECT];
