//! The `step_target!` declaration macro.

/// Declares step methods on a type and implements
/// [`StepTarget`](crate::target::StepTarget) for it.
///
/// The macro takes a single `impl` block. Every method must take `&mut self`;
/// its doc comment becomes the documentation text scanned for
/// `@<kind> <description>` lines, its name is checked against the
/// `<kind>_<rest>` convention, and each parameter is decoded from the call's
/// positional arguments with `serde`. A call may pass more arguments than a
/// method declares; the surplus is ignored. Methods may return `()` or
/// `Result<(), E>` for any `E` convertible into a boxed error.
///
/// # Examples
///
/// ```
/// use bdd_proxy::step_target;
///
/// #[derive(Default)]
/// struct Calculator {
///     total: i64,
/// }
///
/// step_target! {
///     impl Calculator {
///         /// @given a running total
///         fn start_at(&mut self, n: i64) {
///             self.total = n;
///         }
///
///         fn when_it_is_doubled(&mut self) {
///             self.total *= 2;
///         }
///     }
/// }
/// ```
#[macro_export]
macro_rules! step_target {
    (
        impl $target:ty {
            $(
                $(#[doc = $doc:literal])*
                $vis:vis fn $name:ident(
                    &mut $this:ident $(, $arg:ident : $arg_ty:ty)* $(,)?
                ) $(-> $ret:ty)? $body:block
            )*
        }
    ) => {
        impl $target {
            $(
                $(#[doc = $doc])*
                $vis fn $name(&mut $this $(, $arg: $arg_ty)*) $(-> $ret)? $body
            )*
        }

        impl $crate::target::StepTarget for $target {
            fn methods(&self) -> ::std::vec::Vec<$crate::target::MethodDescriptor> {
                ::std::vec![
                    $(
                        $crate::target::MethodDescriptor::new(::core::stringify!($name), {
                            let lines: &[&str] = &[$($doc),*];
                            lines.join("\n")
                        }),
                    )*
                ]
            }

            fn invoke(
                &mut self,
                method: &str,
                args: &[$crate::target::Value],
            ) -> ::core::result::Result<(), $crate::error::BoxError> {
                match method {
                    $(
                        ::core::stringify!($name) => {
                            let cursor = $crate::target::ArgCursor::new(method, args);
                            $(
                                let $arg: $arg_ty = cursor.take(::core::stringify!($arg))?;
                            )*
                            // Arguments past the declared parameters stay unread.
                            let _ = &cursor;
                            $crate::target::IntoStepResult::into_step_result(
                                self.$name($($arg),*),
                            )
                        }
                    )*
                    other => ::core::result::Result::Err(::core::convert::From::from(
                        $crate::target::ArgumentError::UnknownMethod {
                            method: ::std::borrow::ToOwned::to_owned(other),
                        },
                    )),
                }
            }
        }
    };
}
