//! `Kernel_module_ids.h` template

use crate::codegen::GENERATOR;
use crate::types::{Banner, IdRecord, MAX_MODULE_ID, MOD_ID_BITS, MOD_ID_SHIFT};

/// Render the shifted module ID header for all records, in record order
pub fn render_module_ids_header(records: &[IdRecord], banner: &Banner) -> String {
    let defines: Vec<String> = records.iter().map(module_id_define).collect();
    let payload_values = 1u32 << MOD_ID_SHIFT;
    let max_modules = MAX_MODULE_ID + 1;

    format!(
        r#"/**
 * @ingroup kernel
 * @file Kernel_module_ids.h
 * @brief Module IDs for use in reporting constants.
 *
 * The OBC software uses 16-bit constants in many places, for instance for
 * DataPool IDs, Event IDs, error codes etc. The concept of a Constant Module
 * ID is that the first {MOD_ID_BITS} bits of these constants are reserved for a module ID
 * that identifies the module that constant is associated with. For instance
 * the OBC kernel (main system) is module ID 0 - meaning that an event starting
 * with 0b000000 came from the kernel itself. In a 16-bit unsigned integer this
 * leaves {MOD_ID_SHIFT} bits available for constants, a total of {payload_values} different
 * possibilities. {MOD_ID_BITS} bits of module ID allows for up to {max_modules} modules.
 *
 * This file defines those IDs for the source code. There is a corresponding
 * document {source} which defines these values officially. This file should
 * mirror that document at all times.
 *
 * Generated by {GENERATOR}
 *
 * @version {version}
 * @date {date}
 */

#ifndef H_KERNEL_MODULE_IDS_H
#define H_KERNEL_MODULE_IDS_H

/* -------------------------------------------------------------------------
 * INCLUDES
 * ------------------------------------------------------------------------- */

/* Standard library includes */
#include <stdint.h>

/* -------------------------------------------------------------------------
 * DEFINES
 * ------------------------------------------------------------------------- */

/**
 * @brief The number of bits to left shift the module IDs by.
 *
 * This shift converts a raw ID number into a value which can be ORed against
 * to generate a full value of, for instance an Event ID.
 *
 * The module ID for FDIR is 0x02, but its shifted value is 0x800.
 */
#define KERNEL_MOD_ID_SHIFT ({MOD_ID_SHIFT})

/* -------------------------------------------------------------------------
 * MODULE IDS
 * ------------------------------------------------------------------------- */

{defines}

#endif /* H_KERNEL_MODULE_IDS_H */
"#,
        source = banner.source_name,
        version = banner.version,
        date = banner.date_string(),
        defines = defines.join("\n"),
    )
}

fn module_id_define(record: &IdRecord) -> String {
    format!(
        "/**\n * @brief Shifted module ID for the {} module ({} group).\n */\n#define {} ((uint16_t)(0x{:02X}<<KERNEL_MOD_ID_SHIFT))\n",
        record.module_name, record.group_name, record.definition, record.module_id
    )
}
