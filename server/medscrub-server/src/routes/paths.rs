//! Route path constants.

pub mod health {
    pub const HEALTH: &str = "/health";
    pub const VERSION: &str = "/version";
}

pub mod pages {
    pub const HOW_IT_WORKS: &str = "/";
    pub const EXAMPLE: &str = "/example";
    pub const AUDIO: &str = "/audio";
    pub const TEXT: &str = "/text";
}

pub mod anonymize {
    pub const TEXT: &str = "/api/v1/anonymize/text";
    pub const AUDIO: &str = "/api/v1/anonymize/audio";
}
