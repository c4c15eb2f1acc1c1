use alloy::{
    contract::{ContractInstance, Interface},
    dyn_abi::DynSolValue,
    json_abi::JsonAbi,
    providers::Provider,
};
use async_trait::async_trait;
use tracing::trace;

use crate::{
    environment::CrowdsaleTarget, error::ReadError, normalize::RawResult,
    types::family::CrowdsaleFamily,
};

/// Read-only access to the crowdsale's accessors.
#[async_trait]
pub trait ContractReader: Send + Sync {
    fn has_accessor(&self, name: &str) -> bool;

    async fn read(&self, accessor: &str, args: &[DynSolValue]) -> Result<RawResult, ReadError>;
}

/// Reader backed by `eth_call` against a dynamically described interface.
pub struct RpcReader<P>
where
    P: Provider + Clone,
{
    instance: ContractInstance<P>,
    prefix: Vec<DynSolValue>,
}

impl<P> RpcReader<P>
where
    P: Provider + Clone,
{
    pub fn new(
        provider: P,
        target: &CrowdsaleTarget,
        family: CrowdsaleFamily,
    ) -> Result<Self, ReadError> {
        let abi = JsonAbi::parse(target.read_signatures(family))
            .map_err(|err| ReadError::Abi(err.to_string()))?;
        Ok(Self::with_abi(provider, target, abi))
    }

    /// Use an externally supplied interface, e.g. a deployment's JSON ABI.
    pub fn with_abi(provider: P, target: &CrowdsaleTarget, abi: JsonAbi) -> Self {
        Self {
            instance: ContractInstance::new(
                target.read_address(),
                provider,
                Interface::new(abi),
            ),
            prefix: target.read_prefix(),
        }
    }
}

#[async_trait]
impl<P> ContractReader for RpcReader<P>
where
    P: Provider + Clone,
{
    fn has_accessor(&self, name: &str) -> bool {
        self.instance.abi().function(name).is_some()
    }

    async fn read(&self, accessor: &str, args: &[DynSolValue]) -> Result<RawResult, ReadError> {
        let function = self
            .instance
            .abi()
            .function(accessor)
            .and_then(|overloads| overloads.first())
            .ok_or_else(|| ReadError::MissingAccessor(accessor.to_owned()))?;

        let mut inputs = self.prefix.clone();
        inputs.extend_from_slice(args);

        let values = self.instance.function(accessor, &inputs)?.call().await?;
        trace!(accessor, ?values, "accessor returned");

        Ok(RawResult::from_outputs(
            values,
            function.outputs.iter().map(|param| param.name.as_str()),
        ))
    }
}
