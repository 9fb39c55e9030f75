pub use crate::{
    codec::{FnCodec, IdCodec},
    config::HarnessConfig,
    harness::{CodecReport, CodecRun, Failure, bench_all, bench_codec, verify_round_trip},
    pool::{IdentifierPool, generate},
};
pub use idcodec_core::result::{Error, Result};
