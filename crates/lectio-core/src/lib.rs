//! Core library crate for Lectio: Scripture citations, the Roman liturgical
//! calendar and the lectionary that joins them.

pub mod books;
pub mod calendar;
pub mod citation;
pub mod config;
pub mod dates;
pub mod lectionary;
pub mod logging;
pub mod normalize;
pub mod rules;
pub mod text_store;

pub use books::{Book, Testament, Versification};
pub use calendar::{
    CalendarCache, CalendarError, CalendarYear, Celebration, Resolution, SundayCycle,
    WeekdayCycle, parse_date, resolve,
};
pub use citation::{
    Citation, CitationError, Location, VerseAddr, parse_citation, parse_citation_in,
};
pub use config::{
    ConfigError, ConfigLoadResult, ConfigSource, FileConfig, OutputFormat, RuntimeOverrides,
    apply_runtime_overrides, config_directory, config_path, load_config,
    resolve_text_store_dir, save_config,
};
pub use dates::{SUPPORTED_YEARS, easter_sunday};
pub use lectionary::{
    CelebrationQuery, Lectionary, LectionaryEntry, LectionaryError, MassReadings,
    ResolvedReading,
};
pub use logging::{LoggingDestination, LoggingError, current_log_path, init_logging};
pub use rules::{Precedence, Rank, Season};
pub use text_store::{MemoryTextStore, TextStore, TextStoreError, Verse, fetch};
