//! Derived facts about an address/mask pair.

use super::ipv4::serialize_dotted_quad;
use serde::Serialize;
use std::fmt;

/// Historical address class, taken from the leading bits of the first octet.
#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum AddressClass {
    A,
    B,
    C,
    /// Multicast.
    D,
    /// Reserved.
    E,
}

impl fmt::Display for AddressClass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let letter = match self {
            AddressClass::A => "A",
            AddressClass::B => "B",
            AddressClass::C => "C",
            AddressClass::D => "D",
            AddressClass::E => "E",
        };
        write!(f, "{letter}")
    }
}

/// Result of analysing one address and mask.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct NetworkInfo {
    /// The address as entered.
    #[serde(serialize_with = "serialize_dotted_quad")]
    pub address: u32,
    /// The subnet mask as entered.
    #[serde(serialize_with = "serialize_dotted_quad")]
    pub mask: u32,
    #[serde(serialize_with = "serialize_dotted_quad")]
    pub network_address: u32,
    #[serde(serialize_with = "serialize_dotted_quad")]
    pub broadcast_address: u32,
    /// CIDR prefix length, 0-32.
    pub prefix_length: u8,
    pub usable_hosts: u64,
    pub is_classful: bool,
    pub address_class: AddressClass,
}

impl NetworkInfo {
    /// `Class A`/`Class B`/`Class C` when the mask is the class default,
    /// otherwise `Classless`.
    pub fn classification(&self) -> String {
        if self.is_classful {
            format!("Class {}", self.address_class)
        } else {
            "Classless".to_string()
        }
    }
}
