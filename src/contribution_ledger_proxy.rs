#![allow(dead_code)]
#![allow(clippy::all)]

use multiversx_sc::proxy_imports::*;

use crate::types::{CiphertextHandle, Contribution};

pub struct ContributionLedgerProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for ContributionLedgerProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = ContributionLedgerProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        ContributionLedgerProxyMethods { wrapped_tx: tx }
    }
}

pub struct ContributionLedgerProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

impl<Env, From, Gas> ContributionLedgerProxyMethods<Env, From, (), Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    Gas: TxGas<Env>,
{
    pub fn init<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        fhe_gateway_address: Arg0,
    ) -> TxTypedDeploy<Env, From, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_deploy()
            .argument(&fhe_gateway_address)
            .original_result()
    }
}

impl<Env, From, To, Gas> ContributionLedgerProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    pub fn upgrade(self) -> TxTypedUpgrade<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_upgrade()
            .original_result()
    }
}

impl<Env, From, To, Gas> ContributionLedgerProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    pub fn set_fhe_gateway_address<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        fhe_gateway_address: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("setFheGatewayAddress")
            .argument(&fhe_gateway_address)
            .original_result()
    }

    pub fn submit_contribution<
        Arg0: ProxyArg<ManagedBuffer<Env::Api>>,
        Arg1: ProxyArg<CiphertextHandle<Env::Api>>,
        Arg2: ProxyArg<ManagedBuffer<Env::Api>>,
    >(
        self,
        id: Arg0,
        encrypted_score: Arg1,
        input_proof: Arg2,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("submitContribution")
            .argument(&id)
            .argument(&encrypted_score)
            .argument(&input_proof)
            .original_result()
    }

    pub fn verify_contribution<
        Arg0: ProxyArg<ManagedBuffer<Env::Api>>,
        Arg1: ProxyArg<u64>,
        Arg2: ProxyArg<ManagedBuffer<Env::Api>>,
    >(
        self,
        id: Arg0,
        clear_value: Arg1,
        decryption_proof: Arg2,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("verifyContribution")
            .argument(&id)
            .argument(&clear_value)
            .argument(&decryption_proof)
            .original_result()
    }

    pub fn get_contribution<Arg0: ProxyArg<ManagedBuffer<Env::Api>>>(
        self,
        id: Arg0,
    ) -> TxTypedCall<
        Env,
        From,
        To,
        NotPayable,
        Gas,
        MultiValue4<ManagedAddress<Env::Api>, u64, bool, u64>,
    > {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getContribution")
            .argument(&id)
            .original_result()
    }

    pub fn get_encrypted_score<Arg0: ProxyArg<ManagedBuffer<Env::Api>>>(
        self,
        id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, CiphertextHandle<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getEncryptedScore")
            .argument(&id)
            .original_result()
    }

    pub fn list_contribution_ids(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, MultiValueEncoded<Env::Api, ManagedBuffer<Env::Api>>>
    {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("listContributionIds")
            .original_result()
    }

    pub fn get_contributions<Arg0: ProxyArg<u64>, Arg1: ProxyArg<u64>>(
        self,
        from: Arg0,
        count: Arg1,
    ) -> TxTypedCall<
        Env,
        From,
        To,
        NotPayable,
        Gas,
        MultiValueEncoded<Env::Api, Contribution<Env::Api>>,
    > {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getContributions")
            .argument(&from)
            .argument(&count)
            .original_result()
    }

    pub fn get_contribution_count(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getContributionCount")
            .original_result()
    }

    pub fn get_member<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        address: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, MultiValue4<u64, u64, u64, bool>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getMember")
            .argument(&address)
            .original_result()
    }

    pub fn get_fhe_gateway_address(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ManagedAddress<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getFheGatewayAddress")
            .original_result()
    }
}
