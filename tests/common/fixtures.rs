//! Device-domain fixtures shared across integration tests.
//!
//! Provides a small set of concrete classes, a trait, and module builders
//! covering the common registration shapes: parameterless constructors,
//! parameterized constructors, trait-object views, and failing providers.

use anyhow::anyhow;
use typecatalog::{ConstructorBuilder, Module, TypeDescriptor};

/// Concrete class with both a parameterless and a parameterized constructor.
#[derive(Debug, Clone, PartialEq)]
pub struct Sensor {
    pub label: String,
    pub range: u32,
}

impl Sensor {
    pub fn new(label: String, range: u32) -> Self {
        Self { label, range }
    }
}

impl Default for Sensor {
    fn default() -> Self {
        Self::new("sensor".to_string(), 100)
    }
}

/// Concrete class with a parameterless constructor only.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Actuator {
    pub channel: u8,
}

/// Base type declared abstract; never instantiable through the catalog.
#[derive(Debug)]
pub struct Rig;

/// Trait the concrete devices implement and expose as a view.
pub trait Device {
    fn describe(&self) -> String;
}

impl Device for Sensor {
    fn describe(&self) -> String {
        format!("sensor {} (range {})", self.label, self.range)
    }
}

impl Device for Actuator {
    fn describe(&self) -> String {
        format!("actuator on channel {}", self.channel)
    }
}

/// Record for [`Sensor`]: both constructors, each with a `Box<dyn Device>` view.
pub fn sensor_record() -> TypeDescriptor {
    TypeDescriptor::class_named::<Sensor>("devices::Sensor")
        .constructor(
            ConstructorBuilder::parameterless(Sensor::default)
                .with_view::<Box<dyn Device>>(|s| Box::new(s)),
        )
        .constructor(
            ConstructorBuilder::of(|(label, range): (String, u32)| Sensor::new(label, range))
                .with_view::<Box<dyn Device>>(|s| Box::new(s)),
        )
        .build()
}

/// Module declaring the sensor class plus non-concrete records.
///
/// The abstract, interface, and value records exercise catalog filtering;
/// only the sensor class should survive a scan.
pub fn sensors_module() -> Module {
    Module::new("sensors", || {
        Ok(vec![
            sensor_record(),
            TypeDescriptor::abstract_class::<Rig>(),
            TypeDescriptor::interface::<dyn Device>(),
            TypeDescriptor::value::<u32>(),
        ])
    })
}

/// Module declaring the actuator class.
pub fn actuators_module() -> Module {
    Module::new("actuators", || {
        Ok(vec![TypeDescriptor::class_named::<Actuator>(
            "devices::Actuator",
        )
        .constructor(
            ConstructorBuilder::parameterless(Actuator::default)
                .with_view::<Box<dyn Device>>(|a| Box::new(a)),
        )
        .build()])
    })
}

/// Module whose provider always fails, simulating an unscannable module.
pub fn locked_module() -> Module {
    Module::new("locked_plugin", || Err(anyhow!("access denied")))
}
