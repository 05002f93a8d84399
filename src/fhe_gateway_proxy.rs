use multiversx_sc::proxy_imports::*;

use crate::types::CiphertextHandle;

pub struct FheGatewayProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for FheGatewayProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = FheGatewayProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        FheGatewayProxyMethods { wrapped_tx: tx }
    }
}

pub struct FheGatewayProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

impl<Env, From, To, Gas> FheGatewayProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    pub fn check_well_formed<
        Arg0: ProxyArg<CiphertextHandle<Env::Api>>,
        Arg1: ProxyArg<ManagedBuffer<Env::Api>>,
    >(
        self,
        handle: Arg0,
        input_proof: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("checkWellFormed")
            .argument(&handle)
            .argument(&input_proof)
            .original_result()
    }

    pub fn grant_decrypt_access<Arg0: ProxyArg<CiphertextHandle<Env::Api>>>(
        self,
        handle: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("grantDecryptAccess")
            .argument(&handle)
            .original_result()
    }

    pub fn verify_clear_value<
        Arg0: ProxyArg<MultiValueEncoded<Env::Api, CiphertextHandle<Env::Api>>>,
        Arg1: ProxyArg<ManagedBuffer<Env::Api>>,
        Arg2: ProxyArg<ManagedBuffer<Env::Api>>,
    >(
        self,
        handles: Arg0,
        clear_payload: Arg1,
        proof: Arg2,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("verifyClearValue")
            .argument(&handles)
            .argument(&clear_payload)
            .argument(&proof)
            .original_result()
    }
}
