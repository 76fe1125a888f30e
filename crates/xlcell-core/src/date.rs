//! Workbook date systems

/// Epoch convention for date serial numbers
///
/// Spreadsheets store dates as day counts from an epoch that depends on the workbook.
/// The offsets here are the serial of 1970-01-01 in each system, so
/// `(serial - offset) * 86400` gives Unix seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DateSystem {
    /// 1900 system (serial 1 = 1900-01-01, with the 1900 leap-year bug)
    #[default]
    V1900,
    /// 1904 system (serial 0 = 1904-01-01), older Mac workbooks
    V1904,
}

impl DateSystem {
    /// Serial number of 1970-01-01
    pub fn epoch_offset(&self) -> i32 {
        match self {
            DateSystem::V1900 => 25569,
            DateSystem::V1904 => 24107,
        }
    }

    /// Pick the system from the `date1904` workbook property
    pub fn from_date1904(flag: bool) -> Self {
        if flag {
            DateSystem::V1904
        } else {
            DateSystem::V1900
        }
    }
}
