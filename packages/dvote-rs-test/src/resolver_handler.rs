use std::{collections::HashSet, fmt::Debug};

use cosmwasm_std::{Addr, HexBinary};
use cw_multi_test::{error::AnyResult, AppResponse};
use dvote_rs::{entity_resolver::EntityResolver, types::EntityId};

use crate::harness::DvoteTestApp;

pub struct EntityResolverHandler<'a> {
    pub resolver: EntityResolver,
    pub entity: Addr,
    pub harness: &'a mut DvoteTestApp,
}

impl Debug for EntityResolverHandler<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EntityResolverHandler")
            .field("resolver", &self.resolver.address())
            .field("entity", &self.entity)
            .finish()
    }
}

impl<'a> EntityResolverHandler<'a> {
    /// Entity id of the handler's entity account, as computed by the resolver
    pub fn entity_id(&self) -> EntityId {
        self.entity_id_of(&self.entity)
    }

    pub fn entity_id_of(&self, address: &Addr) -> EntityId {
        self.resolver
            .get_entity_id(&self.harness.app.wrap(), address)
            .unwrap()
    }

    // Raw calls

    pub fn try_set_addr(
        &mut self,
        sender: &Addr,
        node: &EntityId,
        address: &Addr,
    ) -> AnyResult<AppResponse> {
        let msg = self.resolver.set_addr(node, address)?;
        self.harness.execute(sender, msg)
    }

    pub fn try_set_text(
        &mut self,
        sender: &Addr,
        entity_id: &EntityId,
        key: &str,
        value: &str,
    ) -> AnyResult<AppResponse> {
        let msg = self.resolver.set_text(entity_id, key, value)?;
        self.harness.execute(sender, msg)
    }

    pub fn try_set_list_text(
        &mut self,
        sender: &Addr,
        entity_id: &EntityId,
        key: &str,
        index: u32,
        value: &str,
    ) -> AnyResult<AppResponse> {
        let msg = self.resolver.set_list_text(entity_id, key, index, value)?;
        self.harness.execute(sender, msg)
    }

    pub fn try_push_list_text(
        &mut self,
        sender: &Addr,
        entity_id: &EntityId,
        key: &str,
        value: &str,
    ) -> AnyResult<AppResponse> {
        let msg = self.resolver.push_list_text(entity_id, key, value)?;
        self.harness.execute(sender, msg)
    }

    pub fn try_remove_list_index(
        &mut self,
        sender: &Addr,
        entity_id: &EntityId,
        key: &str,
        index: u32,
    ) -> AnyResult<AppResponse> {
        let msg = self.resolver.remove_list_index(entity_id, key, index)?;
        self.harness.execute(sender, msg)
    }

    // Entity helpers

    pub fn set_addr(&mut self, address: &Addr) -> &mut Self {
        println!("[EntityResolverHandler] Setting addr to {address}");
        let (entity, entity_id) = (self.entity.clone(), self.entity_id());
        self.try_set_addr(&entity, &entity_id, address).unwrap();
        self
    }

    pub fn set_text(&mut self, key: &str, value: &str) -> &mut Self {
        println!("[EntityResolverHandler] Setting text {key} to {value:?}");
        let (entity, entity_id) = (self.entity.clone(), self.entity_id());
        self.try_set_text(&entity, &entity_id, key, value).unwrap();
        self
    }

    pub fn set_list_text(&mut self, key: &str, index: u32, value: &str) -> &mut Self {
        println!("[EntityResolverHandler] Setting list {key}[{index}] to {value:?}");
        let (entity, entity_id) = (self.entity.clone(), self.entity_id());
        self.try_set_list_text(&entity, &entity_id, key, index, value)
            .unwrap();
        self
    }

    pub fn push_list_text(&mut self, key: &str, value: &str) -> &mut Self {
        println!("[EntityResolverHandler] Pushing {value:?} to list {key}");
        let (entity, entity_id) = (self.entity.clone(), self.entity_id());
        self.try_push_list_text(&entity, &entity_id, key, value)
            .unwrap();
        self
    }

    pub fn remove_list_index(&mut self, key: &str, index: u32) -> &mut Self {
        println!("[EntityResolverHandler] Removing list {key}[{index}]");
        let (entity, entity_id) = (self.entity.clone(), self.entity_id());
        self.try_remove_list_index(&entity, &entity_id, key, index)
            .unwrap();
        self
    }

    // Queries

    pub fn supports_interface(&self, interface_id: &[u8]) -> bool {
        self.resolver
            .supports_interface(&self.harness.app.wrap(), &HexBinary::from(interface_id))
            .unwrap()
    }

    pub fn addr(&self) -> Option<Addr> {
        self.resolver
            .addr(&self.harness.app.wrap(), &self.entity_id())
            .unwrap()
    }

    pub fn text(&self, key: &str) -> String {
        self.resolver
            .text(&self.harness.app.wrap(), &self.entity_id(), key)
            .unwrap()
    }

    pub fn list(&self, key: &str) -> Vec<String> {
        self.resolver
            .list(&self.harness.app.wrap(), &self.entity_id(), key)
            .unwrap()
    }

    pub fn list_text(&self, key: &str, index: u32) -> AnyResult<String> {
        Ok(self
            .resolver
            .list_text(&self.harness.app.wrap(), &self.entity_id(), key, index)?)
    }

    // Assertion helpers

    pub fn assert_addr(&mut self, expected: Option<&Addr>) -> &mut Self {
        println!("[EntityResolverHandler] Asserting addr is {expected:?}");
        let addr = self.addr();
        assert_eq!(
            addr.as_ref(),
            expected,
            "Expected addr does not match: expected {expected:?}, got {addr:?}"
        );
        self
    }

    pub fn assert_text(&mut self, key: &str, expected: &str) -> &mut Self {
        println!("[EntityResolverHandler] Asserting text {key} is {expected:?}");
        let text = self.text(key);
        assert_eq!(
            text, expected,
            "Expected text {key} does not match: expected {expected:?}, got {text:?}"
        );
        self
    }

    pub fn assert_list(&mut self, key: &str, expected: &[&str]) -> &mut Self {
        println!("[EntityResolverHandler] Asserting list {key} is {expected:?}");
        let list = self.list(key);
        assert_eq!(
            list, expected,
            "Expected list {key} does not match: expected {expected:?}, got {list:?}"
        );
        self
    }

    /// Compares the list ignoring the order of its items
    pub fn assert_list_items(&mut self, key: &str, expected: &[&str]) -> &mut Self {
        println!("[EntityResolverHandler] Asserting list {key} holds {expected:?}");
        let list = self.list(key);
        assert_eq!(
            list.len(),
            expected.len(),
            "Expected list {key} to hold {} items, got {list:?}",
            expected.len()
        );
        assert_eq!(
            list.iter().map(String::as_str).collect::<HashSet<_>>(),
            expected.iter().copied().collect::<HashSet<_>>(),
            "Expected list {key} items do not match: expected {expected:?}, got {list:?}"
        );
        self
    }
}
