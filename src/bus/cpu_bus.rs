/*!
CPU address decoder for the Commodore 64 (6510 processor port banking).

Purpose
- Present the 64 KiB CPU-visible address space.
- Switch BASIC ROM, KERNAL ROM, the character generator and the I/O devices in
  and out over RAM according to the 6510 on-chip port at $0000/$0001.

Control region
- $0000: data-direction register (1 = output line).
- $0001: port data register.
- Bank lines are the port bits for output lines; input lines float high through the
  pull-ups, so `lines = (port & ddr) | !ddr`. With DDR = 0 (power-up) all ROMs and
  I/O are visible.
- Both bytes are also stored in RAM. Every write to either byte recomputes the
  mapping booleans.

Address map
- $A000-$BFFF: BASIC ROM when LORAM && HIRAM, else RAM
- $D000-$DFFF: I/O devices when (LORAM || HIRAM) && CHAREN,
               character ROM when (LORAM || HIRAM) && !CHAREN, else RAM
- $E000-$FFFF: KERNAL ROM when HIRAM, else RAM
- everything else: RAM

Writes
- A write into a mapped window goes to that window's bus. ROM views are `Rom`
  overlays, so they absorb the write into the RAM underneath instead of changing
  ROM content; I/O devices receive the write as a register store.
*/

use crate::bus::memory::ADDRESS_SPACE_SIZE as ADDRESS_SPACE;
use crate::bus::{AddressBus, BaseOffsetAddressBus, Memory, Rom, mask_offset, shared};
use crate::error::{CpuError, Result};

/// Port bit: BASIC ROM visible (together with HIRAM).
pub const LORAM: u8 = 0b0000_0001;
/// Port bit: KERNAL ROM visible; also enables BASIC with LORAM.
pub const HIRAM: u8 = 0b0000_0010;
/// Port bit: I/O devices (set) or character ROM (clear) at $D000.
pub const CHAREN: u8 = 0b0000_0100;

pub const DATA_DIRECTION: u16 = 0x0000;
pub const PORT: u16 = 0x0001;

pub const BASIC_ROM_START: u16 = 0xA000;
pub const BASIC_ROM_SIZE: usize = 0x2000;
pub const IO_START: u16 = 0xD000;
pub const IO_SIZE: usize = 0x1000;
pub const CHAR_ROM_SIZE: usize = 0x1000;
pub const KERNAL_ROM_START: u16 = 0xE000;
pub const KERNAL_ROM_SIZE: usize = 0x2000;

pub struct CpuAddressBus {
    memory: Box<dyn AddressBus>,
    basic_rom: Box<dyn AddressBus>,
    char_rom: Box<dyn AddressBus>,
    io_devices: Box<dyn AddressBus>,
    kernal_rom: Box<dyn AddressBus>,

    data_direction: u8,
    port: u8,

    basic_rom_mapped: bool,
    char_rom_mapped: bool,
    io_devices_mapped: bool,
    kernal_rom_mapped: bool,
}

impl std::fmt::Debug for CpuAddressBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CpuAddressBus")
            .field("data_direction", &self.data_direction)
            .field("port", &self.port)
            .field("basic_rom_mapped", &self.basic_rom_mapped)
            .field("char_rom_mapped", &self.char_rom_mapped)
            .field("io_devices_mapped", &self.io_devices_mapped)
            .field("kernal_rom_mapped", &self.kernal_rom_mapped)
            .finish()
    }
}

/// Collects the five collaborators of a `CpuAddressBus`; `build` fails fast on a
/// missing one or on a wrong size.
#[derive(Default)]
pub struct CpuAddressBusBuilder {
    memory: Option<Box<dyn AddressBus>>,
    basic_rom: Option<Box<dyn AddressBus>>,
    char_rom: Option<Box<dyn AddressBus>>,
    io_devices: Option<Box<dyn AddressBus>>,
    kernal_rom: Option<Box<dyn AddressBus>>,
}

impl CpuAddressBusBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn memory(mut self, bus: Box<dyn AddressBus>) -> Self {
        self.memory = Some(bus);
        self
    }

    pub fn basic_rom(mut self, bus: Box<dyn AddressBus>) -> Self {
        self.basic_rom = Some(bus);
        self
    }

    pub fn char_rom(mut self, bus: Box<dyn AddressBus>) -> Self {
        self.char_rom = Some(bus);
        self
    }

    pub fn io_devices(mut self, bus: Box<dyn AddressBus>) -> Self {
        self.io_devices = Some(bus);
        self
    }

    pub fn kernal_rom(mut self, bus: Box<dyn AddressBus>) -> Self {
        self.kernal_rom = Some(bus);
        self
    }

    pub fn build(self) -> Result<CpuAddressBus> {
        let memory = required(self.memory, "memory", ADDRESS_SPACE)?;
        let basic_rom = required(self.basic_rom, "BASIC ROM", BASIC_ROM_SIZE)?;
        let char_rom = required(self.char_rom, "character ROM", CHAR_ROM_SIZE)?;
        let io_devices = required(self.io_devices, "I/O devices", IO_SIZE)?;
        let kernal_rom = required(self.kernal_rom, "KERNAL ROM", KERNAL_ROM_SIZE)?;

        let mut bus = CpuAddressBus {
            memory,
            basic_rom,
            char_rom,
            io_devices,
            kernal_rom,
            data_direction: 0,
            port: 0,
            basic_rom_mapped: false,
            char_rom_mapped: false,
            io_devices_mapped: false,
            kernal_rom_mapped: false,
        };
        bus.data_direction = bus.memory.read(DATA_DIRECTION as usize);
        bus.port = bus.memory.read(PORT as usize);
        bus.update_mapping();
        Ok(bus)
    }
}

fn required(
    bus: Option<Box<dyn AddressBus>>,
    name: &'static str,
    expected: usize,
) -> Result<Box<dyn AddressBus>> {
    let bus = bus.ok_or(CpuError::MissingCollaborator(name))?;
    if bus.size() != expected {
        return Err(CpuError::RomSize {
            name,
            expected,
            actual: bus.size(),
        });
    }
    Ok(bus)
}

impl CpuAddressBus {
    pub fn builder() -> CpuAddressBusBuilder {
        CpuAddressBusBuilder::new()
    }

    /// Standard C64 wiring: 64 KiB RAM, the three ROM images overlaid on it with
    /// write-through to the RAM beneath, and `io_devices` at $D000.
    pub fn c64(
        basic: Vec<u8>,
        chargen: Vec<u8>,
        kernal: Vec<u8>,
        io_devices: Box<dyn AddressBus>,
    ) -> Result<Self> {
        check_image("BASIC ROM", &basic, BASIC_ROM_SIZE)?;
        check_image("character ROM", &chargen, CHAR_ROM_SIZE)?;
        check_image("KERNAL ROM", &kernal, KERNAL_ROM_SIZE)?;

        let ram = shared(Memory::new(ADDRESS_SPACE));
        let overlay = |image: Vec<u8>, start: u16, size: usize| -> Box<dyn AddressBus> {
            let under = BaseOffsetAddressBus::new(ram.clone(), start as usize, size);
            Box::new(Rom::with_fallback(image, Box::new(under)))
        };

        let basic_rom = overlay(basic, BASIC_ROM_START, BASIC_ROM_SIZE);
        let char_rom = overlay(chargen, IO_START, CHAR_ROM_SIZE);
        let kernal_rom = overlay(kernal, KERNAL_ROM_START, KERNAL_ROM_SIZE);

        CpuAddressBusBuilder::new()
            .memory(Box::new(ram))
            .basic_rom(basic_rom)
            .char_rom(char_rom)
            .io_devices(io_devices)
            .kernal_rom(kernal_rom)
            .build()
    }

    #[inline]
    pub fn basic_rom_mapped(&self) -> bool {
        self.basic_rom_mapped
    }

    #[inline]
    pub fn char_rom_mapped(&self) -> bool {
        self.char_rom_mapped
    }

    #[inline]
    pub fn io_devices_mapped(&self) -> bool {
        self.io_devices_mapped
    }

    #[inline]
    pub fn kernal_rom_mapped(&self) -> bool {
        self.kernal_rom_mapped
    }

    /// Effective LORAM/HIRAM/CHAREN lines after applying the data direction.
    #[inline]
    pub fn bank_lines(&self) -> u8 {
        ((self.port & self.data_direction) | !self.data_direction) & (LORAM | HIRAM | CHAREN)
    }

    /// Direct access to the RAM behind every window.
    pub fn memory_mut(&mut self) -> &mut dyn AddressBus {
        self.memory.as_mut()
    }

    fn update_mapping(&mut self) {
        let lines = self.bank_lines();
        let loram = lines & LORAM != 0;
        let hiram = lines & HIRAM != 0;
        let charen = lines & CHAREN != 0;

        self.basic_rom_mapped = loram && hiram;
        self.kernal_rom_mapped = hiram;
        self.io_devices_mapped = (loram || hiram) && charen;
        self.char_rom_mapped = (loram || hiram) && !charen;

        log::debug!(
            "bank switch: lines={:03b} basic={} kernal={} io={} char={}",
            lines,
            self.basic_rom_mapped,
            self.kernal_rom_mapped,
            self.io_devices_mapped,
            self.char_rom_mapped
        );
    }

    /// Resolve an address to the bus that answers it and the offset within that bus.
    fn window(&mut self, addr: u16) -> (&mut dyn AddressBus, usize) {
        match addr {
            0xA000..=0xBFFF if self.basic_rom_mapped => {
                (self.basic_rom.as_mut(), (addr - BASIC_ROM_START) as usize)
            }
            0xD000..=0xDFFF if self.io_devices_mapped => {
                (self.io_devices.as_mut(), (addr - IO_START) as usize)
            }
            0xD000..=0xDFFF if self.char_rom_mapped => {
                (self.char_rom.as_mut(), (addr - IO_START) as usize)
            }
            0xE000..=0xFFFF if self.kernal_rom_mapped => {
                (self.kernal_rom.as_mut(), (addr - KERNAL_ROM_START) as usize)
            }
            _ => (self.memory.as_mut(), addr as usize),
        }
    }
}

fn check_image(name: &'static str, image: &[u8], expected: usize) -> Result<()> {
    if image.len() != expected {
        return Err(CpuError::RomSize {
            name,
            expected,
            actual: image.len(),
        });
    }
    Ok(())
}

impl AddressBus for CpuAddressBus {
    fn read(&mut self, offset: usize) -> u8 {
        let addr = mask_offset(offset, ADDRESS_SPACE) as u16;
        match addr {
            DATA_DIRECTION => self.data_direction,
            PORT => self.port,
            _ => {
                let (bus, o) = self.window(addr);
                bus.read(o)
            }
        }
    }

    fn write(&mut self, offset: usize, value: u8) {
        let addr = mask_offset(offset, ADDRESS_SPACE) as u16;
        match addr {
            DATA_DIRECTION | PORT => {
                if addr == DATA_DIRECTION {
                    self.data_direction = value;
                } else {
                    self.port = value;
                }
                self.memory.write(addr as usize, value);
                self.update_mapping();
            }
            _ => {
                let (bus, o) = self.window(addr);
                bus.write(o, value);
            }
        }
    }

    #[inline]
    fn size(&self) -> usize {
        ADDRESS_SPACE
    }
}
