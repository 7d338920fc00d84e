//! Centralized constants
//!
//! Names of the PrivacyStreams-Events API surface the analyzer looks for, and
//! the tunables that bound recursive reconstruction. `AnalyzerConfig` starts
//! from these values.

/// Target event API (PrivacyStreams-Events)
pub mod target_api {
    /// Package prefix of the event library bundled into analyzed apps
    pub const PACKAGE: &str = "io.github.privacystreamsevents";

    /// Entry-point type whose calls seed new pipelines
    pub const ENTRY_POINT_CLASS: &str = "io.github.privacystreamsevents.core.UQI";

    /// Listener registration; methods calling it are analyzed for events
    pub const LISTENER_API: &str = "<io.github.privacystreamsevents.core.UQI: void addEventListener(io.github.privacystreamsevents.core.EventType,io.github.privacystreamsevents.core.EventCallback)>";

    /// Fluent-stream supertype (short name)
    pub const STREAM_TYPE: &str = "PStream";

    /// Declaring types whose short name contains this marker continue a chain
    pub const STREAM_MARKER: &str = "Stream";

    /// Static type of built-in field calculation functions
    pub const FUNCTION_TYPE: &str = "io.github.privacystreamsevents.core.Function";

    /// Setter that opens a new event record
    pub const OPENING_SETTER: &str = "setField";

    /// Collection method whose literal arguments form list values
    pub const LIST_ACCUMULATOR: &str = "add";

    /// Stands in for vararg elements that are not literals
    pub const VARARG_PLACEHOLDER: &str = "<io.github.privacysecurer.core.EventType: java.lang.Long Off>";

    pub const AUDIO_BUILDER: &str =
        "io.github.privacystreamsevents.core.AudioEvent$AudioEventBuilder";
    pub const GEOLOCATION_BUILDER: &str =
        "io.github.privacystreamsevents.core.GeolocationEvent$GeolocationEventBuilder";
    pub const CONTACT_BUILDER: &str =
        "io.github.privacystreamsevents.core.ContactEvent$ContactEventBuilder";
    pub const MESSAGE_BUILDER: &str =
        "io.github.privacystreamsevents.core.MessageEvent$MessageEventBuilder";
    pub const IMAGE_BUILDER: &str =
        "io.github.privacystreamsevents.core.ImageEvent$ImageEventBuilder";
}

/// Value resolution bounds
pub mod resolution {
    /// Default recursion bound for definition-chain following
    pub const DEFAULT_MAX_DEPTH: usize = 64;

    /// Accepted range for `resolver.max_depth`
    pub const MIN_DEPTH: usize = 1;
    pub const MAX_DEPTH: usize = 256;

    /// Calls one pipeline chain may expand before further uses turn Unknown
    pub const MAX_CHAIN_CALLS: usize = 4096;
}

/// Attribute graph labels
pub mod graph {
    pub const ROOT_LABEL: &str = "ROOT";

    /// Separator between an API signature and each serialized argument
    pub const API_ARG_SEPARATOR: &str = "-----";
}

/// Rendering
pub mod rendering {
    /// Marker for chain children with no resolvable continuation
    pub const UNKNOWN_MARKER: &str = "<unknown>";

    /// Fingerprint of a method whose body could not be read
    pub const UNKNOWN_FINGERPRINT: &str = "<UNKNOWN>";

    /// Emitted for records that match no description template
    pub const UNMATCHED_NOTICE: &str = "No matchable event type, please check it.";
}
