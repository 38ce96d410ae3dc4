// Languiny Core Library
// Wrong-layout remapping and switch detection

pub mod buffer;
pub mod corrector;
pub mod detect;
pub mod layout;
pub mod remap;
pub mod rules;
pub mod table;

#[cfg(feature = "config")]
pub mod settings;

pub use buffer::{Word, WordBuffer};
pub use corrector::{Correction, Corrector};
pub use detect::{
    should_switch, Candidate, Detector, DetectorConfig, LexicalScorer, PlausibilityScorer, Verdict,
};
pub use layout::{Layout, LayoutError};
pub use remap::{remap, remap_word};
pub use rules::WordFilter;
pub use table::{MappingTable, TableError, TableRegistry};

#[cfg(feature = "config")]
pub use settings::{Settings, SettingsError};

/// Library version reported across the C boundary
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
