use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

//==============================================================================
// Constant layout
//==============================================================================

/// Bits a module ID is shifted left by to land in the high bits of a 16-bit constant
pub const MOD_ID_SHIFT: u32 = 10;

/// Width of the module ID field in a 16-bit constant
pub const MOD_ID_BITS: u32 = 16 - MOD_ID_SHIFT;

/// Largest module ID that fits in the module ID field
pub const MAX_MODULE_ID: u32 = (1 << MOD_ID_BITS) - 1;

/// Group whose members also get an application ID
pub const APPLICATIONS_GROUP: &str = "Applications";

//==============================================================================
// Records
//==============================================================================

/// One assigned module identifier, as read from a row of the ID table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdRecord {
    pub group_name: String,
    pub module_name: String,
    pub module_id: u32,
    pub definition: String,
}

impl IdRecord {
    pub fn new(
        group_name: impl Into<String>,
        module_name: impl Into<String>,
        module_id: u32,
        definition: impl Into<String>,
    ) -> Self {
        Self {
            group_name: group_name.into(),
            module_name: module_name.into(),
            module_id,
            definition: definition.into(),
        }
    }

    /// True if this module belongs to the applications group
    pub fn is_application(&self) -> bool {
        self.group_name == APPLICATIONS_GROUP
    }

    /// Application ID constant name (`MOD_ID_FOO` becomes `APP_ID_FOO`)
    pub fn app_definition(&self) -> String {
        self.definition.replace("MOD", "APP")
    }

    /// Module ID moved into the high bits of a 16-bit constant.
    ///
    /// `None` when the ID is wider than the module ID field.
    pub fn shifted_id(&self) -> Option<u16> {
        if self.module_id > MAX_MODULE_ID {
            return None;
        }
        u16::try_from(self.module_id << MOD_ID_SHIFT).ok()
    }
}

//==============================================================================
// Banner
//==============================================================================

/// Provenance embedded in the documentation block of each generated header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub version: String,
    pub source_name: String,
    pub date: NaiveDate,
}

impl Banner {
    pub fn new(version: impl Into<String>, source_name: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            version: version.into(),
            source_name: source_name.into(),
            date,
        }
    }

    /// Banner dated with the local calendar day
    pub fn today(version: impl Into<String>, source_name: impl Into<String>) -> Self {
        Self::new(version, source_name, Local::now().date_naive())
    }

    pub fn date_string(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}
