//! Network, broadcast and host arithmetic for a validated address/mask.
//!
//! Every function here expects a mask that already passed
//! [`validate_mask`](crate::models::validate_mask).

use crate::models::{validate_mask, AddressClass, NetworkInfo, MAX_LENGTH};

/// CIDR prefix length: the number of 1-bits in the mask.
pub fn prefix_length(mask: u32) -> u8 {
    mask.count_ones() as u8
}

/// Lowest address of the subnet.
pub fn network_address(addr: u32, mask: u32) -> u32 {
    addr & mask
}

/// Highest address of the subnet.
pub fn broadcast_address(addr: u32, mask: u32) -> u32 {
    addr | !mask
}

/// Number of host addresses, excluding network and broadcast.
///
/// /31 and /32 both give 0: two addresses are always reserved, with no
/// RFC 3021 point-to-point exception.
pub fn usable_hosts(mask: u32) -> u64 {
    let host_bits = MAX_LENGTH - prefix_length(mask);
    if host_bits <= 1 {
        0
    } else {
        (1u64 << host_bits) - 2
    }
}

/// Classful range of an address, by the leading bits of its first octet.
pub fn classify_address(addr: u32) -> AddressClass {
    match addr.leading_ones() {
        0 => AddressClass::A,
        1 => AddressClass::B,
        2 => AddressClass::C,
        3 => AddressClass::D,
        _ => AddressClass::E,
    }
}

/// Natural mask length of a class; D and E have none.
pub fn default_prefix_length(class: AddressClass) -> Option<u8> {
    match class {
        AddressClass::A => Some(8),
        AddressClass::B => Some(16),
        AddressClass::C => Some(24),
        AddressClass::D | AddressClass::E => None,
    }
}

/// True when the mask is exactly the natural mask of the address's class.
pub fn is_classful(addr: u32, mask: u32) -> bool {
    default_prefix_length(classify_address(addr)) == Some(prefix_length(mask))
}

/// Derive every [`NetworkInfo`] field from an address and a valid mask.
pub fn calculate(addr: u32, mask: u32) -> NetworkInfo {
    debug_assert!(validate_mask(mask), "mask {mask:#010x} is not contiguous");

    let info = NetworkInfo {
        address: addr,
        mask,
        network_address: network_address(addr, mask),
        broadcast_address: broadcast_address(addr, mask),
        prefix_length: prefix_length(mask),
        usable_hosts: usable_hosts(mask),
        is_classful: is_classful(addr, mask),
        address_class: classify_address(addr),
    };
    log::debug!("calculate({addr:#010x}, {mask:#010x}) = {info:?}");
    info
}
