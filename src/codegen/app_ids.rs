//! `Kernel_app_ids.h` template

use crate::codegen::GENERATOR;
use crate::types::{Banner, IdRecord};

/// Render the application ID header from the records in the applications group
pub fn render_app_ids_header(records: &[IdRecord], banner: &Banner) -> String {
    let defines: Vec<String> = records
        .iter()
        .filter(|record| record.is_application())
        .map(app_id_define)
        .collect();

    format!(
        r#"/**
 * @ingroup kernel
 * @file Kernel_app_ids.h
 * @brief App IDs.
 *
 * Application IDs are the raw (unshifted) module IDs of the modules in the
 * Applications group of {source}.
 *
 * Generated by {GENERATOR}
 *
 * @version {version}
 * @date {date}
 */

#ifndef H_KERNEL_APP_IDS_H
#define H_KERNEL_APP_IDS_H

/* -------------------------------------------------------------------------
 * INCLUDES
 * ------------------------------------------------------------------------- */

/* Internal includes */
#include "system/kernel/Kernel_public.h"

/* -------------------------------------------------------------------------
 * APP IDS
 * ------------------------------------------------------------------------- */

{defines}

#endif /* H_KERNEL_APP_IDS_H */
"#,
        source = banner.source_name,
        version = banner.version,
        date = banner.date_string(),
        defines = defines.join("\n"),
    )
}

fn app_id_define(record: &IdRecord) -> String {
    format!(
        "/**\n * @brief App ID for the {} application.\n */\n#define {} ((Kernel_AppId)(0x{:02X}))\n",
        record.module_name,
        record.app_definition(),
        record.module_id
    )
}
