use multiversx_sc::proxy_imports::*;

use contribution_ledger::types::CiphertextHandle;

pub struct FheGatewayMockProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for FheGatewayMockProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = FheGatewayMockProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        FheGatewayMockProxyMethods { wrapped_tx: tx }
    }
}

pub struct FheGatewayMockProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

impl<Env, From, Gas> FheGatewayMockProxyMethods<Env, From, (), Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    Gas: TxGas<Env>,
{
    pub fn init(self) -> TxTypedDeploy<Env, From, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_deploy()
            .original_result()
    }
}

impl<Env, From, To, Gas> FheGatewayMockProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    pub fn set_reject_ciphertexts<Arg0: ProxyArg<bool>>(
        self,
        reject: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("setRejectCiphertexts")
            .argument(&reject)
            .original_result()
    }

    pub fn set_reject_proofs<Arg0: ProxyArg<bool>>(
        self,
        reject: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("setRejectProofs")
            .argument(&reject)
            .original_result()
    }

    pub fn is_decrypt_granted<Arg0: ProxyArg<CiphertextHandle<Env::Api>>>(
        self,
        handle: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("isDecryptGranted")
            .argument(&handle)
            .original_result()
    }
}
