// Repositories own their records and expose read operations only. Records are
// validated once, when they are accepted, never on reads.

pub mod user;
