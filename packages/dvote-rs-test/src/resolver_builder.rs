use cosmwasm_std::Addr;
use cw_multi_test::error::AnyResult;
use dvote_rs::entity_resolver::EntityResolver;

use crate::{harness::DvoteTestApp, resolver_handler::EntityResolverHandler};

pub struct EntityResolverBuilder<'a> {
    app: &'a mut DvoteTestApp,
    deployer: Addr,
    entity: Addr,
    texts: Vec<(String, String)>,
    lists: Vec<(String, Vec<String>)>,
}

impl<'a> EntityResolverBuilder<'a> {
    pub fn new(app: &'a mut DvoteTestApp) -> Self {
        let deployer = app.deployer();
        let entity = app.entity();

        Self {
            app,
            deployer,
            entity,
            texts: vec![],
            lists: vec![],
        }
    }

    pub fn with_entity_account(mut self, entity: Addr) -> Self {
        self.entity = entity;
        self
    }

    pub fn with_text(mut self, key: &str, value: &str) -> Self {
        self.texts.push((key.to_string(), value.to_string()));
        self
    }

    pub fn with_list(mut self, key: &str, values: &[&str]) -> Self {
        self.lists.push((
            key.to_string(),
            values.iter().map(|v| v.to_string()).collect(),
        ));
        self
    }

    pub fn build(self) -> EntityResolverHandler<'a> {
        self.try_build().unwrap()
    }

    pub fn try_build(self) -> AnyResult<EntityResolverHandler<'a>> {
        let resolver_addr = self.app.instantiate_entity_resolver(&self.deployer)?;

        let mut handler = EntityResolverHandler {
            resolver: EntityResolver(resolver_addr),
            entity: self.entity,
            harness: self.app,
        };

        let entity_id = handler.entity_id();
        let entity = handler.entity.clone();

        for (key, value) in self.texts {
            handler.try_set_text(&entity, &entity_id, &key, &value)?;
        }

        for (key, values) in self.lists {
            for value in values {
                handler.try_push_list_text(&entity, &entity_id, &key, &value)?;
            }
        }

        Ok(handler)
    }
}
