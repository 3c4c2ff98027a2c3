/*!
Paged module: a fixed number of equally sized pages, each backed by its own bus.

Routing: `page = offset / page_size`, `sub = offset % page_size` after the offset
has been reduced modulo the total size.
*/

use crate::bus::{AddressBus, mask_offset};
use crate::error::{CpuError, Result};

pub struct PagedAddressBus {
    pages: Vec<Box<dyn AddressBus>>,
    page_size: usize,
}

impl PagedAddressBus {
    /// Build from pages that must all be exactly `page_size` bytes.
    pub fn new(page_size: usize, pages: Vec<Box<dyn AddressBus>>) -> Result<Self> {
        for (index, page) in pages.iter().enumerate() {
            if page.size() != page_size {
                return Err(CpuError::PageSize {
                    index,
                    expected: page_size,
                    actual: page.size(),
                });
            }
        }
        Ok(Self { pages, page_size })
    }

    #[inline]
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    #[inline]
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Swap the bus backing page `index`, returning the old one.
    pub fn replace_page(
        &mut self,
        index: usize,
        page: Box<dyn AddressBus>,
    ) -> Result<Box<dyn AddressBus>> {
        if page.size() != self.page_size {
            return Err(CpuError::PageSize {
                index,
                expected: self.page_size,
                actual: page.size(),
            });
        }
        let count = self.pages.len();
        match self.pages.get_mut(index) {
            Some(slot) => Ok(std::mem::replace(slot, page)),
            None => Err(CpuError::PageIndex { index, count }),
        }
    }

    #[inline]
    fn route(&self, offset: usize) -> (usize, usize) {
        let o = mask_offset(offset, self.size());
        if self.page_size == 0 {
            (0, 0)
        } else {
            (o / self.page_size, o % self.page_size)
        }
    }
}

impl AddressBus for PagedAddressBus {
    fn read(&mut self, offset: usize) -> u8 {
        let (page, sub) = self.route(offset);
        match self.pages.get_mut(page) {
            Some(bus) => bus.read(sub),
            None => 0,
        }
    }

    fn write(&mut self, offset: usize, value: u8) {
        let (page, sub) = self.route(offset);
        if let Some(bus) = self.pages.get_mut(page) {
            bus.write(sub, value);
        }
    }

    #[inline]
    fn size(&self) -> usize {
        self.pages.len() * self.page_size
    }
}
