use super::*;
use crate::bus::cpu_bus::{BASIC_ROM_SIZE, CHAR_ROM_SIZE, IO_SIZE, KERNAL_ROM_SIZE};
use crate::error::CpuError;
use crate::test_utils::{RecordingDevice, c64_bus};

#[test]
fn paged_write_stays_in_its_page() {
    let pages: Vec<Box<dyn AddressBus>> = (0..4)
        .map(|_| Box::new(Memory::new(0x100)) as Box<dyn AddressBus>)
        .collect();
    let mut bus = PagedAddressBus::new(0x100, pages).expect("pages");
    assert_eq!(bus.size(), 0x400);

    bus.write(0x1FF, 0xAB);
    assert_eq!(bus.read(0x1FF), 0xAB);
    // Same sub-offset in neighbouring pages is untouched.
    assert_eq!(bus.read(0x0FF), 0x00);
    assert_eq!(bus.read(0x2FF), 0x00);
    // Offsets beyond size wrap back into the composite.
    assert_eq!(bus.read(0x5FF), 0xAB);
}

#[test]
fn paged_routes_to_backing_bus() {
    let shared_page = shared(Memory::new(0x10));
    let pages: Vec<Box<dyn AddressBus>> = vec![
        Box::new(Memory::new(0x10)),
        Box::new(shared_page.clone()),
    ];
    let mut bus = PagedAddressBus::new(0x10, pages).expect("pages");
    bus.write(0x13, 0x77);
    assert_eq!(shared_page.borrow().as_slice()[3], 0x77);
}

#[test]
fn paged_rejects_mismatched_page() {
    let pages: Vec<Box<dyn AddressBus>> = vec![Box::new(Memory::new(0x10)), Box::new(Memory::new(0x20))];
    let err = PagedAddressBus::new(0x10, pages).err();
    assert_eq!(
        err,
        Some(CpuError::PageSize {
            index: 1,
            expected: 0x10,
            actual: 0x20
        })
    );
}

#[test]
fn paged_replace_page() {
    let pages: Vec<Box<dyn AddressBus>> = vec![Box::new(Memory::new(0x10))];
    let mut bus = PagedAddressBus::new(0x10, pages).expect("pages");
    let rom: Box<dyn AddressBus> = Box::new(Rom::new(vec![0x5A; 0x10]));
    assert!(bus.replace_page(0, rom).is_ok());
    assert_eq!(bus.read(0x03), 0x5A);
    let extra: Box<dyn AddressBus> = Box::new(Memory::new(0x10));
    assert!(matches!(
        bus.replace_page(3, extra),
        Err(CpuError::PageIndex { index: 3, count: 1 })
    ));
}

#[test]
fn power_up_maps_all_roms() {
    let (bus, _) = c64_bus();
    assert!(bus.basic_rom_mapped());
    assert!(bus.kernal_rom_mapped());
    assert!(bus.io_devices_mapped());
    assert!(!bus.char_rom_mapped());
}

#[test]
fn loram_exposes_basic_rom() {
    let (mut bus, _) = c64_bus();
    bus.write(0x0000, 0x07);
    bus.write(0x0001, HIRAM | CHAREN);
    assert!(!bus.basic_rom_mapped());
    bus.write(0xA000, 0x42);
    assert_eq!(bus.read(0xA000), 0x42); // RAM

    bus.write(0x0001, LORAM | HIRAM | CHAREN);
    assert!(bus.basic_rom_mapped());
    assert_eq!(bus.read(0xA000), 0xBA); // synthetic BASIC fill
}

#[test]
fn writes_into_mapped_rom_reach_ram_underneath() {
    let (mut bus, _) = c64_bus();
    bus.write(0x0000, 0x07);
    bus.write(0x0001, LORAM | HIRAM | CHAREN);

    bus.write(0xA123, 0x99);
    assert_eq!(bus.read(0xA123), 0xBA); // ROM content unchanged

    bus.write(0x0001, HIRAM | CHAREN); // bank BASIC out
    assert_eq!(bus.read(0xA123), 0x99); // write landed in RAM
}

#[test]
fn kernal_follows_hiram() {
    let (mut bus, _) = c64_bus();
    bus.write(0x0000, 0x07);
    bus.write(0x0001, LORAM | CHAREN);
    assert!(!bus.kernal_rom_mapped());
    assert!(!bus.basic_rom_mapped());
    assert_eq!(bus.read(0xFFFC), 0x00);

    bus.write(0x0001, HIRAM | CHAREN);
    assert!(bus.kernal_rom_mapped());
    assert_eq!(bus.read(0xE000), 0xEE);
}

#[test]
fn charen_selects_io_or_character_rom() {
    let (mut bus, io) = c64_bus();
    bus.write(0x0000, 0x07);
    bus.write(0x0001, LORAM | HIRAM | CHAREN);
    bus.write(0xD020, 0x0E);
    assert_eq!(io.borrow().writes, vec![(0x020, 0x0E)]);

    bus.write(0x0001, LORAM | HIRAM);
    assert!(bus.char_rom_mapped());
    assert_eq!(bus.read(0xD020), 0xC4);

    // All ROMs out: the whole range is RAM.
    bus.write(0x0001, 0x00);
    assert!(!bus.io_devices_mapped());
    assert!(!bus.char_rom_mapped());
    bus.write(0xD020, 0x01);
    assert_eq!(bus.read(0xD020), 0x01);
    assert_eq!(io.borrow().writes.len(), 1);
}

#[test]
fn input_lines_read_high() {
    let (mut bus, _) = c64_bus();
    // Only LORAM is an output and it is driven low; HIRAM/CHAREN float high.
    bus.write(0x0000, LORAM);
    bus.write(0x0001, 0x00);
    assert_eq!(bus.bank_lines(), HIRAM | CHAREN);
    assert!(!bus.basic_rom_mapped());
    assert!(bus.kernal_rom_mapped());
}

#[test]
fn control_bytes_are_mirrored_to_ram() {
    let (mut bus, _) = c64_bus();
    bus.write(0x0000, 0x2F);
    bus.write(0x0001, 0x37);
    assert_eq!(bus.read(0x0000), 0x2F);
    assert_eq!(bus.read(0x0001), 0x37);
    assert_eq!(bus.memory_mut().read(0x0001), 0x37);
}

#[test]
fn builder_fails_fast() {
    let missing = CpuAddressBus::builder()
        .memory(Box::new(Memory::default()))
        .build()
        .err();
    assert_eq!(missing, Some(CpuError::MissingCollaborator("BASIC ROM")));

    let wrong_size = CpuAddressBus::builder()
        .memory(Box::new(Memory::default()))
        .basic_rom(Box::new(Rom::new(vec![0; BASIC_ROM_SIZE])))
        .char_rom(Box::new(Rom::new(vec![0; CHAR_ROM_SIZE])))
        .io_devices(Box::new(RecordingDevice::new(IO_SIZE)))
        .kernal_rom(Box::new(Rom::new(vec![0; KERNAL_ROM_SIZE - 1])))
        .build()
        .err();
    assert_eq!(
        wrong_size,
        Some(CpuError::RomSize {
            name: "KERNAL ROM",
            expected: KERNAL_ROM_SIZE,
            actual: KERNAL_ROM_SIZE - 1
        })
    );
}

#[test]
fn offsets_wrap_at_64k() {
    let (mut bus, _) = c64_bus();
    bus.write(0x1_0400, 0x12);
    assert_eq!(bus.read(0x0400), 0x12);
}
