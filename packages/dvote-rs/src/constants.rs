/**
 * Interface ids answered by the entity resolver `supports_interface` query.
 *
 * The first three are the ERC-165, addr and text selectors used by ENS
 * resolvers, kept so that ENS-aware clients can probe the resolver the
 * same way on every chain. The list interface is specific to the resolver.
 */
pub const INTERFACE_META_ID: [u8; 4] = [0x01, 0xff, 0xc9, 0xa7];
pub const ADDR_INTERFACE_ID: [u8; 4] = [0x3b, 0x3b, 0x57, 0xde];
pub const TEXT_INTERFACE_ID: [u8; 4] = [0x59, 0xd1, 0xd4, 0x3c];
pub const LIST_INTERFACE_ID: [u8; 4] = [0xae, 0x8f, 0x0a, 0x9a];

pub const SUPPORTED_INTERFACES: [[u8; 4]; 4] = [
    INTERFACE_META_ID,
    ADDR_INTERFACE_ID,
    TEXT_INTERFACE_ID,
    LIST_INTERFACE_ID,
];

/// Page size of listing queries when none (or a larger one) is requested.
pub const MAX_QUERY_LIMIT: u16 = 30;
