//! Declaration sugar for modules.

/// Declare a [`Module`](crate::Module) from a record list or a provider.
///
/// The list form covers the common infallible case; record expressions are
/// re-evaluated on every scan and capture any locals they mention by value:
///
/// ```ignore
/// let module = declare_module!("widgets", [
///     TypeDescriptor::class::<Widget>()
///         .constructor(ConstructorBuilder::parameterless(Widget::default))
///         .build(),
/// ]);
/// ```
///
/// The provider form takes an explicit closure for enumerations that can
/// fail:
///
/// ```ignore
/// let module = declare_module!("plugins", provider = || scan_plugin_dir());
/// ```
#[macro_export]
macro_rules! declare_module {
    ($name:expr, [ $( $record:expr ),* $(,)? ]) => {
        $crate::Module::new($name, move || {
            ::core::result::Result::Ok(::std::vec![ $( $record ),* ])
        })
    };
    ($name:expr, provider = $provider:expr) => {
        $crate::Module::new($name, $provider)
    };
}

#[cfg(test)]
mod tests {
    use anyhow::anyhow;
    use typecatalog_types::{ConstructorBuilder, TypeDescriptor, TypeKind};

    #[derive(Default)]
    struct Switch;

    #[test]
    fn test_list_form() {
        let module = declare_module!(
            "switches",
            [TypeDescriptor::class::<Switch>()
                .constructor(ConstructorBuilder::parameterless(Switch::default))
                .build()]
        );
        assert_eq!(module.name(), "switches");
        let declared = module.declared_types().unwrap();
        assert_eq!(declared.len(), 1);
        assert_eq!(declared[0].kind(), TypeKind::Class);

        // Records are rebuilt per scan
        assert_eq!(module.declared_types().unwrap().len(), 1);
    }

    #[test]
    fn test_list_form_accepts_trailing_comma_and_empty_list() {
        let trailing = declare_module!(
            "trailing",
            [TypeDescriptor::value::<u32>(), TypeDescriptor::value::<u64>(),]
        );
        assert_eq!(trailing.declared_types().unwrap().len(), 2);

        let empty = declare_module!("empty", []);
        assert!(empty.declared_types().unwrap().is_empty());
    }

    #[test]
    fn test_list_form_captures_locals_by_value() {
        let name = String::from("panel::Switch");
        let module = declare_module!(
            "panels",
            [TypeDescriptor::class_named::<Switch>(name.clone())
                .constructor(ConstructorBuilder::parameterless(Switch::default))
                .build()]
        );

        let declared = module.declared_types().unwrap();
        assert_eq!(declared[0].ident().name(), "panel::Switch");
        // Still rebuilt per scan with the captured value
        assert_eq!(module.declared_types().unwrap().len(), 1);
    }

    #[test]
    fn test_provider_form_propagates_errors() {
        let module = declare_module!("locked", provider = || Err(anyhow!("access denied")));
        let err = module.declared_types().unwrap_err();
        assert_eq!(err.to_string(), "access denied");
    }
}
