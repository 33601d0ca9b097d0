use crate::models::common::BlockHeight;

/// Returns the current Internet Computer time, used as the registry height.
pub fn current_height() -> BlockHeight {
    ic_cdk::api::time()
}
