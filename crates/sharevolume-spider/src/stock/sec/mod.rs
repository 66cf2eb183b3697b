mod cik;
mod shares;
mod transform;

pub use cik::{is_ten_digit_cik, Cik};
pub use shares::{relay_url, source_url, SharesClient};
pub use transform::{filter_records, normalize, select_extrema, DisclosureRecord, Extrema, FY_CUTOFF};
