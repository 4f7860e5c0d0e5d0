// Pattern 1: Builder
// A product assembled one setter at a time, with a director that knows presets.

use std::fmt;
use std::mem;

use crate::output::SharedOutput;

/// Rendered in place of any component that was never set.
pub const UNSET: &str = "unset";

// ============================================================================
// Product
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Computer {
    cpu: Option<String>,
    ram: Option<String>,
    storage: Option<String>,
    gpu: Option<String>,
    power_supply: Option<String>,
}

impl Computer {
    pub fn cpu(&self) -> Option<&str> {
        self.cpu.as_deref()
    }

    pub fn ram(&self) -> Option<&str> {
        self.ram.as_deref()
    }

    pub fn storage(&self) -> Option<&str> {
        self.storage.as_deref()
    }

    pub fn gpu(&self) -> Option<&str> {
        self.gpu.as_deref()
    }

    pub fn power_supply(&self) -> Option<&str> {
        self.power_supply.as_deref()
    }

    /// Multi-line spec sheet; missing parts show as [`UNSET`].
    pub fn specs(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Computer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let show = |part: &Option<String>| part.as_deref().unwrap_or(UNSET).to_string();
        writeln!(f, "Computer specs:")?;
        writeln!(f, "- CPU: {}", show(&self.cpu))?;
        writeln!(f, "- RAM: {}", show(&self.ram))?;
        writeln!(f, "- Storage: {}", show(&self.storage))?;
        writeln!(f, "- GPU: {}", show(&self.gpu))?;
        write!(f, "- Power: {}", show(&self.power_supply))
    }
}

// ============================================================================
// Builder
// ============================================================================

/// Setters return the builder so calls chain; `build` hands back whatever
/// has been configured so far. Values are not validated.
pub trait ComputerBuilder {
    fn set_cpu(&mut self, cpu: impl Into<String>) -> &mut Self;
    fn set_ram(&mut self, ram: impl Into<String>) -> &mut Self;
    fn set_storage(&mut self, storage: impl Into<String>) -> &mut Self;
    fn set_gpu(&mut self, gpu: impl Into<String>) -> &mut Self;
    fn set_power_supply(&mut self, power: impl Into<String>) -> &mut Self;
    fn build(&mut self) -> Computer;
}

/// Reports every part it installs.
///
/// `build` moves the product out and leaves the builder empty, so one
/// builder can assemble several machines in a row.
pub struct GamingComputerBuilder {
    computer: Computer,
    out: SharedOutput,
}

impl GamingComputerBuilder {
    pub fn new(out: SharedOutput) -> Self {
        Self {
            computer: Computer::default(),
            out,
        }
    }

    fn install(&self, label: &str, value: String) -> Option<String> {
        self.out.emit(&format!("{label} set: {value}"));
        Some(value)
    }
}

impl ComputerBuilder for GamingComputerBuilder {
    fn set_cpu(&mut self, cpu: impl Into<String>) -> &mut Self {
        self.computer.cpu = self.install("CPU", cpu.into());
        self
    }

    fn set_ram(&mut self, ram: impl Into<String>) -> &mut Self {
        self.computer.ram = self.install("RAM", ram.into());
        self
    }

    fn set_storage(&mut self, storage: impl Into<String>) -> &mut Self {
        self.computer.storage = self.install("Storage", storage.into());
        self
    }

    fn set_gpu(&mut self, gpu: impl Into<String>) -> &mut Self {
        self.computer.gpu = self.install("GPU", gpu.into());
        self
    }

    fn set_power_supply(&mut self, power: impl Into<String>) -> &mut Self {
        self.computer.power_supply = self.install("Power", power.into());
        self
    }

    fn build(&mut self) -> Computer {
        self.out.emit("Computer assembled!");
        mem::take(&mut self.computer)
    }
}

// ============================================================================
// Director
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    Gaming,
    Office,
    /// Assembled by the client rather than the director.
    Custom,
}

impl Preset {
    pub const ALL: [Preset; 3] = [Preset::Gaming, Preset::Office, Preset::Custom];
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Preset::Gaming => "gaming",
            Preset::Office => "office",
            Preset::Custom => "custom",
        };
        f.write_str(name)
    }
}

pub struct ComputerDirector {
    out: SharedOutput,
}

impl ComputerDirector {
    pub fn new(out: SharedOutput) -> Self {
        Self { out }
    }

    pub fn build_gaming_pc<B: ComputerBuilder>(&self, builder: &mut B) -> Computer {
        self.out.emit("Assembling gaming PC...");
        builder
            .set_cpu("Intel i9-13900K")
            .set_ram("32GB DDR5")
            .set_storage("2TB NVMe SSD")
            .set_gpu("NVIDIA RTX 4090")
            .set_power_supply("850W 80+ Gold")
            .build()
    }

    /// Integrated graphics: the GPU slot stays empty.
    pub fn build_office_pc<B: ComputerBuilder>(&self, builder: &mut B) -> Computer {
        self.out.emit("Assembling office PC...");
        builder
            .set_cpu("Intel i5-13400")
            .set_ram("16GB DDR4")
            .set_storage("512GB SSD")
            .set_power_supply("500W 80+ Bronze")
            .build()
    }
}

pub fn build_computer<B: ComputerBuilder>(
    director: &ComputerDirector,
    builder: &mut B,
    preset: Preset,
) -> Computer {
    tracing::debug!(%preset, "building computer");
    match preset {
        Preset::Gaming => director.build_gaming_pc(builder),
        Preset::Office => director.build_office_pc(builder),
        Preset::Custom => builder
            .set_cpu("AMD Ryzen 7 5800X")
            .set_ram("16GB DDR4")
            .set_storage("1TB SSD")
            .set_gpu("AMD RX 6700 XT")
            .set_power_supply("650W 80+ Gold")
            .build(),
    }
}
