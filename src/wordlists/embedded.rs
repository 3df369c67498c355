//! Embedded word lists
//!
//! Every `data/<N>-letter-words.txt` file compiled into the binary at build time.

// Include generated lookup from build script
include!(concat!(env!("OUT_DIR"), "/embedded_lists.rs"));
