//! Labeled address report
//!
//! This module defines the data gathered by the probe and how it is printed:
//! - [`Label`]: the fixed set of probed variables, in report order
//! - [`StorageClass`]: the storage duration each label belongs to
//! - [`Report`]: the recorded addresses plus the scratch block location
//! - [`spans`]: per-class address spans for the map viewer
//!
//! # Line Format
//!
//! ```text
//! l1 [0x7ffd5c1e2a4c]
//! argc [0x7ffd5c1e2a3c]
//! ...
//! alloc [0x7ffd5c1e2a40]
//! ```
//!
//! Addresses use `0x` followed by lowercase hex digits with no padding.

pub mod spans;

use std::fmt;

/// Memory address as seen by this process
pub type Address = usize;

/// Storage duration of a probed variable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StorageClass {
    /// Locals and parameters of the probing call frame
    Automatic,
    /// Argument vector storage handed over by the process launcher
    LaunchArgs,
    /// Globals zeroed at load time
    ZeroedStatic,
    /// Globals initialized at load time with a non-zero value
    InitializedStatic,
    /// Blocks requested at run time
    Dynamic,
}

impl StorageClass {
    pub const ALL: [StorageClass; 5] = [
        StorageClass::Automatic,
        StorageClass::LaunchArgs,
        StorageClass::ZeroedStatic,
        StorageClass::InitializedStatic,
        StorageClass::Dynamic,
    ];

    /// Segment this class conventionally lands in on a typical ELF process
    pub fn conventional_segment(self) -> &'static str {
        match self {
            StorageClass::Automatic | StorageClass::LaunchArgs => "stack",
            StorageClass::ZeroedStatic => "bss",
            StorageClass::InitializedStatic => "data",
            StorageClass::Dynamic => "heap",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            StorageClass::Automatic => "automatic",
            StorageClass::LaunchArgs => "launch args",
            StorageClass::ZeroedStatic => "zeroed static",
            StorageClass::InitializedStatic => "initialized static",
            StorageClass::Dynamic => "dynamic",
        }
    }
}

/// One probed variable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    /// Uninitialized local
    L1,
    /// Address of the argument count parameter
    Argc,
    /// Address of the argument vector parameter
    ArgvRef,
    /// Where the argument vector points
    Argv,
    /// First element of the argument vector (the program name string)
    ArgvFirst,
    /// Zero-initialized global
    G1,
    /// Global initialized to a fixed value
    Gi1,
    /// Handle owning the scratch block
    Alloc,
}

impl Label {
    /// Report order
    pub const ALL: [Label; 8] = [
        Label::L1,
        Label::Argc,
        Label::ArgvRef,
        Label::Argv,
        Label::ArgvFirst,
        Label::G1,
        Label::Gi1,
        Label::Alloc,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Label::L1 => "l1",
            Label::Argc => "argc",
            Label::ArgvRef => "&argv",
            Label::Argv => "argv",
            Label::ArgvFirst => "*argv",
            Label::G1 => "g1",
            Label::Gi1 => "gi1",
            Label::Alloc => "alloc",
        }
    }

    pub fn storage_class(self) -> StorageClass {
        match self {
            Label::L1 | Label::Argc | Label::ArgvRef | Label::Alloc => StorageClass::Automatic,
            Label::Argv | Label::ArgvFirst => StorageClass::LaunchArgs,
            Label::G1 => StorageClass::ZeroedStatic,
            Label::Gi1 => StorageClass::InitializedStatic,
        }
    }

    pub fn parse(s: &str) -> Option<Label> {
        Label::ALL.into_iter().find(|label| label.as_str() == s)
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A recorded address
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry {
    pub label: Label,
    pub address: Address,
}

impl Entry {
    pub fn storage_class(&self) -> StorageClass {
        self.label.storage_class()
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.label, format_address(self.address))
    }
}

/// Location of the scratch block owned by the `alloc` handle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockInfo {
    pub address: Address,
    pub size: usize,
}

/// All addresses recorded by one probe run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    entries: Vec<Entry>,
    block: BlockInfo,
}

impl Report {
    /// Build a report from addresses given in [`Label::ALL`] order
    pub fn new(addresses: [Address; 8], block: BlockInfo) -> Self {
        let entries = Label::ALL
            .into_iter()
            .zip(addresses)
            .map(|(label, address)| Entry { label, address })
            .collect();
        Report { entries, block }
    }

    /// Entries in report order
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn block(&self) -> BlockInfo {
        self.block
    }

    pub fn address_of(&self, label: Label) -> Option<Address> {
        self.entries
            .iter()
            .find(|entry| entry.label == label)
            .map(|entry| entry.address)
    }

    /// Report lines, one per entry, without trailing newlines
    pub fn lines(&self) -> Vec<String> {
        self.entries.iter().map(|entry| entry.to_string()).collect()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            writeln!(f, "{}", entry)?;
        }
        Ok(())
    }
}

/// Render an address as `0x` + lowercase hex
pub fn format_address(address: Address) -> String {
    format!("{:#x}", address)
}

/// Parse a single `<label> [0x<hex>]` line back into an entry
pub fn parse_line(line: &str) -> Option<Entry> {
    let (label, rest) = line.split_once(' ')?;
    let hex = rest.strip_prefix("[0x")?.strip_suffix(']')?;
    if hex.is_empty() || hex.chars().any(|c| c.is_ascii_uppercase()) {
        return None;
    }
    let address = Address::from_str_radix(hex, 16).ok()?;
    Some(Entry {
        label: Label::parse(label)?,
        address,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Report {
        Report::new(
            [
                0x7ffc_0010,
                0x7ffc_000c,
                0x7ffc_0000,
                0x7ffc_1000,
                0x7ffc_2000,
                0x5555_0018,
                0x5555_0010,
                0x7ffc_0008,
            ],
            BlockInfo {
                address: 0x5555_9000,
                size: 16,
            },
        )
    }

    #[test]
    fn test_labels_follow_report_order() {
        let report = sample();
        let labels: Vec<&str> = report.entries().iter().map(|e| e.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["l1", "argc", "&argv", "argv", "*argv", "g1", "gi1", "alloc"]
        );
    }

    #[test]
    fn test_line_format() {
        let report = sample();
        assert_eq!(report.lines()[0], "l1 [0x7ffc0010]");
        assert_eq!(report.lines()[6], "gi1 [0x55550010]");
        assert_eq!(report.to_string().lines().count(), 8);
    }

    #[test]
    fn test_null_address_renders_as_zero() {
        assert_eq!(format_address(0), "0x0");
    }

    #[test]
    fn test_parse_line() {
        let entry = parse_line("*argv [0xdeadbeef]").expect("valid line");
        assert_eq!(entry.label, Label::ArgvFirst);
        assert_eq!(entry.address, 0xdead_beef);

        assert!(parse_line("*argv [0xDEADBEEF]").is_none());
        assert!(parse_line("sp [0x10]").is_none());
        assert!(parse_line("l1 0x10").is_none());
        assert!(parse_line("l1 [0x]").is_none());
    }

    #[test]
    fn test_each_label_has_one_class() {
        assert_eq!(Label::G1.storage_class(), StorageClass::ZeroedStatic);
        assert_eq!(Label::Gi1.storage_class(), StorageClass::InitializedStatic);
        assert_eq!(Label::Alloc.storage_class(), StorageClass::Automatic);
        assert_eq!(Label::ArgvFirst.storage_class(), StorageClass::LaunchArgs);
        assert_eq!(StorageClass::ZeroedStatic.conventional_segment(), "bss");
    }
}
