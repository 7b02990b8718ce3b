pub mod add;
pub mod config;
pub mod del;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod shift;
pub mod show;
pub mod update;

use crate::core::validate::ManagerDraft;
use crate::models::day::Day;
use crate::utils::hours::split_range;

/// Copy the seven optional `--mon .. --sun` specs into a draft. Days without
/// a spec are left as they are (blank for add, prefilled for update).
pub(crate) fn apply_day_specs(draft: &mut ManagerDraft, specs: [&Option<String>; 7]) {
    for (day, spec) in Day::ALL.iter().zip(specs) {
        if let Some(spec) = spec {
            let (start, end) = split_range(spec);
            let field = draft.day_mut(*day);
            field.start = start;
            field.end = end;
        }
    }
}
