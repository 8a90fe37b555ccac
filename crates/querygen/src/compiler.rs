//! Compilation entry point: request in, descriptor model out.

use tracing::{debug, info};

use crate::config::validate_request;
use crate::core::request::CodeGenRequest;
use crate::core::traits::TypeResolver;
use crate::dialect::ResolverImpl;
use crate::error::Result;
use crate::model::dedup::StructIndex;
use crate::model::{enums, queries, structs, BuildContext, Model};

/// Compiles one request into a [`Model`].
pub struct Compiler<'a> {
    request: &'a CodeGenRequest,
    resolver: ResolverImpl,
}

impl<'a> Compiler<'a> {
    /// Validate the request and pick the resolver for its engine.
    pub fn new(request: &'a CodeGenRequest) -> Result<Self> {
        validate_request(request)?;
        let resolver = ResolverImpl::for_engine(&request.catalog, &request.settings);
        debug!("Using {} type resolver", resolver.engine());
        Ok(Self { request, resolver })
    }

    /// Run the builders in dependency order.
    ///
    /// Either every query compiles or nothing is returned.
    pub fn run(&self) -> Result<Model> {
        let ctx = BuildContext {
            catalog: &self.request.catalog,
            settings: &self.request.settings,
            resolver: &self.resolver,
        };

        let enums = enums::build_enums(&ctx);
        let index = StructIndex::new(structs::build_structs(&ctx));
        let queries = queries::build_queries(&ctx, &self.request.queries, &index)?;

        let mut structs = index.into_structs();
        structs::sort_structs(&mut structs);

        let reused = queries
            .iter()
            .filter(|q| q.ret.is_struct() && !q.ret.emit_struct())
            .count();
        info!(
            "Compiled {} enums, {} structs, {} queries ({} reuse a table struct)",
            enums.len(),
            structs.len(),
            queries.len(),
            reused
        );

        Ok(Model {
            enums,
            structs,
            queries,
        })
    }
}

/// Compile `request` into a model.
pub fn generate(request: &CodeGenRequest) -> Result<Model> {
    Compiler::new(request)?.run()
}
