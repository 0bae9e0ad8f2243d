//! The shop target the dispatch scenarios drive.

use bdd_proxy::step_target;

/// A target recording which of its step methods ran.
#[derive(Debug, Default)]
pub struct Shop {
    /// Method names in invocation order.
    pub invoked: Vec<String>,
}

impl Shop {
    fn record(&mut self, method: &str) {
        self.invoked.push(method.to_owned());
    }
}

step_target! {
    impl Shop {
        /// @given an empty cart
        fn empty_cart(&mut self) {
            self.record("empty_cart");
        }

        /// @given a signed in customer
        fn signed_in_customer(&mut self) {
            self.record("signed_in_customer");
        }

        /// @when a book is added
        fn add_book(&mut self) {
            self.record("add_book");
        }

        /// @when a pen is added
        fn add_pen(&mut self) {
            self.record("add_pen");
        }

        /// @then the cart holds one item
        fn holds_one_item(&mut self) {
            self.record("holds_one_item");
        }

        fn then_the_total_is_zero(&mut self) {
            self.record("then_the_total_is_zero");
        }

        /// @when checkout is attempted
        fn checkout(&mut self) -> Result<(), String> {
            Err(String::from("payment declined"))
        }

        /// @dado um carrinho vazio
        fn carrinho_vazio(&mut self) {
            self.record("carrinho_vazio");
        }

        /// @dado um cliente conectado
        fn cliente_conectado(&mut self) {
            self.record("cliente_conectado");
        }

        /// @entao a compra é concluída
        fn compra_concluida(&mut self) {
            self.record("compra_concluida");
        }
    }
}
