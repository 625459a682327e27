//! # CPU State and Execution
//!
//! This module contains the CPU struct representing the 6502 processor state and
//! the fetch-decode-execute loop.
//!
//! ## CPU State
//!
//! - **Registers**: Accumulator (A), index registers (X, Y)
//! - **Program counter** (PC): 16-bit address of next instruction byte
//! - **Stack pointer** (SP): 8-bit offset into stack page (0x0100-0x01FF)
//! - **Status register** (P): see `status`
//! - **Cycle counter**: u64 monotonically increasing cycle count
//!
//! ## Execution Model
//!
//! - `step()`: Execute one instruction
//! - `execute()`: Execute until a cycle budget is exhausted
//!
//! Cycles are charged one per bus access through `read_bus`/`write_bus`.
//! An instruction always completes once started, so `execute` can run past
//! its budget by the tail of the last instruction.

use crate::config::{CpuConfig, ResetVector};
use crate::instructions;
use crate::status::{self, Status};
use crate::{ExecutionError, MemoryBus, OPCODE_TABLE};

/// Address of the little-endian reset vector.
pub const RESET_VECTOR: u16 = 0xFFFC;

/// Address of the little-endian IRQ/BRK vector.
pub const IRQ_VECTOR: u16 = 0xFFFE;

/// Stack pointer value after reset.
pub const RESET_SP: u8 = 0xFF;

/// 6502 CPU state and execution context.
///
/// Generic over the memory implementation via the `MemoryBus` trait. The CPU
/// owns its bus; callers reach memory through `memory()`/`memory_mut()`.
///
/// # Examples
///
/// ```
/// use cpu6502::{CPU, FlatMemory, MemoryBus};
///
/// let mut memory = FlatMemory::new();
/// memory.write(0xFFFC, 0x00);
/// memory.write(0xFFFD, 0x80);
///
/// let cpu = CPU::new(memory);
///
/// assert_eq!(cpu.pc(), 0x8000);
/// assert_eq!(cpu.sp(), 0xFF);
/// assert!(cpu.flag_i());
/// assert_eq!(cpu.cycles(), 0);
/// ```
pub struct CPU<M: MemoryBus> {
    /// Accumulator register
    pub(crate) a: u8,

    /// X index register
    pub(crate) x: u8,

    /// Y index register
    pub(crate) y: u8,

    /// Program counter (address of next instruction byte)
    pub(crate) pc: u16,

    /// Stack pointer (0x0100 + sp gives full stack address)
    pub(crate) sp: u8,

    /// Status register
    pub(crate) p: Status,

    /// Total CPU cycles executed since reset
    pub(crate) cycles: u64,

    pub(crate) config: CpuConfig,

    /// Memory bus implementation
    pub(crate) memory: M,
}

impl<M: MemoryBus> CPU<M> {
    /// Creates a CPU with the default configuration and resets it.
    ///
    /// The program counter is loaded from the reset vector at 0xFFFC/0xFFFD.
    pub fn new(memory: M) -> Self {
        Self::with_config(memory, CpuConfig::default())
    }

    /// Creates a CPU with an explicit configuration and resets it.
    pub fn with_config(memory: M, config: CpuConfig) -> Self {
        let mut cpu = Self {
            a: 0,
            x: 0,
            y: 0,
            pc: 0,
            sp: RESET_SP,
            p: Status::power_on(),
            cycles: 0,
            config,
            memory,
        };
        cpu.reset();
        cpu
    }

    /// Returns the CPU to its power-on state.
    ///
    /// - PC from the reset vector (or the configured fixed address)
    /// - SP = 0xFF
    /// - P = 0x24 (interrupts disabled, unused bit set)
    /// - A, X, Y and the cycle counter cleared
    ///
    /// Reset itself charges no cycles.
    pub fn reset(&mut self) {
        self.pc = match self.config.reset_vector {
            ResetVector::FromMemory => {
                let lo = self.memory.read(RESET_VECTOR) as u16;
                let hi = self.memory.read(RESET_VECTOR.wrapping_add(1)) as u16;
                (hi << 8) | lo
            }
            ResetVector::Fixed(addr) => addr,
        };
        self.a = 0;
        self.x = 0;
        self.y = 0;
        self.sp = RESET_SP;
        self.p = Status::power_on();
        self.cycles = 0;

        log::debug!("reset: pc=0x{:04X}", self.pc);
    }

    /// Executes one instruction.
    ///
    /// Fetches the opcode at PC (1 cycle), decodes it through `OPCODE_TABLE`
    /// and runs it to completion.
    ///
    /// # Errors
    ///
    /// `ExecutionError::UnrecognizedOpcode` if the byte is not a documented
    /// opcode. The fetch cycle stays charged and PC has moved past the byte;
    /// nothing else changes.
    ///
    /// # Examples
    ///
    /// ```
    /// use cpu6502::{CPU, ExecutionError, FlatMemory, MemoryBus};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.write(0xFFFC, 0x00);
    /// mem.write(0xFFFD, 0x80);
    /// mem.write(0x8000, 0x02); // undocumented
    ///
    /// let mut cpu = CPU::new(mem);
    ///
    /// assert_eq!(
    ///     cpu.step(),
    ///     Err(ExecutionError::UnrecognizedOpcode { opcode: 0x02, address: 0x8000 })
    /// );
    /// assert_eq!(cpu.pc(), 0x8001);
    /// assert_eq!(cpu.cycles(), 1);
    /// ```
    pub fn step(&mut self) -> Result<(), ExecutionError> {
        let address = self.pc;
        let opcode = self.fetch_byte();
        let metadata = &OPCODE_TABLE[opcode as usize];

        let Some(instruction) = metadata.instruction else {
            log::warn!("unrecognized opcode 0x{:02X} at 0x{:04X}", opcode, address);
            return Err(ExecutionError::UnrecognizedOpcode { opcode, address });
        };

        log::trace!(
            "0x{:04X}: {} {:?}",
            address,
            instruction.mnemonic(),
            metadata.addressing_mode
        );
        instructions::execute(self, instruction, metadata.addressing_mode);

        Ok(())
    }

    /// Runs instructions until `cycle_budget` cycles have been spent.
    ///
    /// The budget is only checked between instructions. An instruction that
    /// starts with budget left always completes, so the return value can
    /// exceed the budget by up to six cycles. Zero and overrun are the same
    /// "exhausted" condition.
    ///
    /// # Returns
    ///
    /// - `Ok(cycles_consumed)` once the budget is exhausted
    /// - `Err(ExecutionError)` as soon as an instruction fails; the cycles it
    ///   spent are still reflected in `cycles()`
    ///
    /// # Examples
    ///
    /// ```
    /// use cpu6502::{CPU, FlatMemory, MemoryBus};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.write(0xFFFC, 0x00);
    /// mem.write(0xFFFD, 0x80);
    /// mem.load(0x8000, &[0xEA; 16]); // NOPs
    ///
    /// let mut cpu = CPU::new(mem);
    ///
    /// assert_eq!(cpu.execute(10), Ok(10));
    /// assert_eq!(cpu.pc(), 0x8005);
    /// ```
    pub fn execute(&mut self, cycle_budget: u32) -> Result<u64, ExecutionError> {
        let start_cycles = self.cycles;
        let budget = u64::from(cycle_budget);

        while self.cycles - start_cycles < budget {
            self.step()?;
        }

        Ok(self.cycles - start_cycles)
    }

    // ========== Bus Access ==========

    /// Reads a byte and charges one cycle.
    pub(crate) fn read_bus(&mut self, addr: u16) -> u8 {
        self.cycles += 1;
        self.memory.read(addr)
    }

    /// Writes a byte and charges one cycle.
    pub(crate) fn write_bus(&mut self, addr: u16, value: u8) {
        self.cycles += 1;
        self.memory.write(addr, value);
    }

    /// Bus cycle whose data the CPU throws away.
    pub(crate) fn dummy_read(&mut self, addr: u16) {
        let _ = self.read_bus(addr);
    }

    /// Reads the byte at PC and advances PC.
    pub(crate) fn fetch_byte(&mut self) -> u8 {
        let value = self.read_bus(self.pc);
        self.pc = self.pc.wrapping_add(1);
        value
    }

    /// Reads a little-endian word at PC and advances PC by two.
    pub(crate) fn fetch_word(&mut self) -> u16 {
        let lo = self.fetch_byte() as u16;
        let hi = self.fetch_byte() as u16;
        (hi << 8) | lo
    }

    // ========== Register Getters ==========

    /// Returns the accumulator register value.
    pub fn a(&self) -> u8 {
        self.a
    }

    /// Returns the X index register value.
    pub fn x(&self) -> u8 {
        self.x
    }

    /// Returns the Y index register value.
    pub fn y(&self) -> u8 {
        self.y
    }

    /// Returns the program counter value.
    pub fn pc(&self) -> u16 {
        self.pc
    }

    /// Returns the stack pointer value.
    ///
    /// The full stack address is 0x0100 + SP. The stack grows downward from 0x01FF.
    pub fn sp(&self) -> u8 {
        self.sp
    }

    /// Returns the status register as a packed byte (NV-BDIZC, bit 5 always 1).
    ///
    /// ```
    /// use cpu6502::{CPU, FlatMemory};
    ///
    /// let cpu = CPU::new(FlatMemory::new());
    /// assert_eq!(cpu.status(), 0b0010_0100);
    /// ```
    pub fn status(&self) -> u8 {
        self.p.bits()
    }

    /// Returns the status register.
    pub fn flags(&self) -> Status {
        self.p
    }

    /// Returns the total number of cycles executed since reset.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Returns the configuration the CPU was built with.
    pub fn config(&self) -> &CpuConfig {
        &self.config
    }

    /// Shared access to the memory bus.
    pub fn memory(&self) -> &M {
        &self.memory
    }

    /// Mutable access to the memory bus, for loading programs and poking state.
    pub fn memory_mut(&mut self) -> &mut M {
        &mut self.memory
    }

    /// Consumes the CPU and hands back its memory bus.
    pub fn into_memory(self) -> M {
        self.memory
    }

    // ========== Status Flag Getters ==========

    /// Returns true if the Negative flag is set.
    pub fn flag_n(&self) -> bool {
        self.p.is_set(status::N)
    }

    /// Returns true if the Overflow flag is set.
    pub fn flag_v(&self) -> bool {
        self.p.is_set(status::V)
    }

    /// Returns true if the Break flag is set.
    pub fn flag_b(&self) -> bool {
        self.p.is_set(status::B)
    }

    /// Returns true if the Decimal mode flag is set.
    pub fn flag_d(&self) -> bool {
        self.p.is_set(status::D)
    }

    /// Returns true if the Interrupt Disable flag is set.
    pub fn flag_i(&self) -> bool {
        self.p.is_set(status::I)
    }

    /// Returns true if the Zero flag is set.
    pub fn flag_z(&self) -> bool {
        self.p.is_set(status::Z)
    }

    /// Returns true if the Carry flag is set.
    pub fn flag_c(&self) -> bool {
        self.p.is_set(status::C)
    }

    // ========== Setters ==========

    /// Sets the accumulator.
    pub fn set_a(&mut self, value: u8) {
        self.a = value;
    }

    /// Sets the X register.
    pub fn set_x(&mut self, value: u8) {
        self.x = value;
    }

    /// Sets the Y register.
    pub fn set_y(&mut self, value: u8) {
        self.y = value;
    }

    /// Sets the program counter.
    pub fn set_pc(&mut self, value: u16) {
        self.pc = value;
    }

    /// Sets the stack pointer.
    pub fn set_sp(&mut self, value: u8) {
        self.sp = value;
    }

    /// Replaces the status register. Bit 5 is forced on.
    pub fn set_status(&mut self, value: u8) {
        self.p = Status::from_byte(value);
    }

    /// Sets or clears the Negative flag.
    pub fn set_flag_n(&mut self, value: bool) {
        self.p.set_if(status::N, value);
    }

    /// Sets or clears the Overflow flag.
    pub fn set_flag_v(&mut self, value: bool) {
        self.p.set_if(status::V, value);
    }

    /// Sets or clears the Break flag.
    pub fn set_flag_b(&mut self, value: bool) {
        self.p.set_if(status::B, value);
    }

    /// Sets or clears the Decimal flag.
    pub fn set_flag_d(&mut self, value: bool) {
        self.p.set_if(status::D, value);
    }

    /// Sets or clears the Interrupt Disable flag.
    pub fn set_flag_i(&mut self, value: bool) {
        self.p.set_if(status::I, value);
    }

    /// Sets or clears the Zero flag.
    pub fn set_flag_z(&mut self, value: bool) {
        self.p.set_if(status::Z, value);
    }

    /// Sets or clears the Carry flag.
    pub fn set_flag_c(&mut self, value: bool) {
        self.p.set_if(status::C, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FlatMemory;

    fn setup_cpu() -> CPU<FlatMemory> {
        let mut mem = FlatMemory::new();
        mem.write(0xFFFC, 0x00);
        mem.write(0xFFFD, 0x80);
        CPU::new(mem)
    }

    #[test]
    fn test_cpu_initialization() {
        let cpu = setup_cpu();

        assert_eq!(cpu.pc(), 0x8000);
        assert_eq!(cpu.sp(), 0xFF);
        assert_eq!(cpu.a(), 0x00);
        assert_eq!(cpu.x(), 0x00);
        assert_eq!(cpu.y(), 0x00);
        assert_eq!(cpu.cycles(), 0);

        assert!(cpu.flag_i());
        assert!(!cpu.flag_n());
        assert!(!cpu.flag_v());
        assert!(!cpu.flag_b());
        assert!(!cpu.flag_d());
        assert!(!cpu.flag_z());
        assert!(!cpu.flag_c());
    }

    #[test]
    fn test_fixed_reset_vector_ignores_memory() {
        let mut mem = FlatMemory::new();
        mem.write(0xFFFC, 0x00);
        mem.write(0xFFFD, 0x80);

        let config = CpuConfig {
            reset_vector: ResetVector::Fixed(0xFFFC),
            ..CpuConfig::default()
        };
        let cpu = CPU::with_config(mem, config);

        assert_eq!(cpu.pc(), 0xFFFC);
    }

    #[test]
    fn test_reset_restores_power_on_state() {
        let mut cpu = setup_cpu();
        cpu.memory_mut().load(0x8000, &[0xA9, 0x80]); // LDA #$80
        cpu.step().unwrap();
        cpu.set_sp(0x10);
        cpu.set_flag_c(true);

        cpu.reset();

        assert_eq!(cpu.pc(), 0x8000);
        assert_eq!(cpu.sp(), 0xFF);
        assert_eq!(cpu.a(), 0x00);
        assert_eq!(cpu.status(), 0x24);
        assert_eq!(cpu.cycles(), 0);
    }

    #[test]
    fn test_fetch_byte_advances_pc_and_cycles() {
        let mut cpu = setup_cpu();
        cpu.memory_mut().load(0x8000, &[0x12, 0x34, 0x56]);

        assert_eq!(cpu.fetch_byte(), 0x12);
        assert_eq!(cpu.fetch_word(), 0x5634);
        assert_eq!(cpu.pc(), 0x8003);
        assert_eq!(cpu.cycles(), 3);
    }

    #[test]
    fn test_fetch_wraps_program_counter() {
        let mut cpu = setup_cpu();
        cpu.set_pc(0xFFFF);
        cpu.fetch_byte();
        assert_eq!(cpu.pc(), 0x0000);
    }

    #[test]
    fn test_step_unrecognized_opcode() {
        let mut cpu = setup_cpu();
        cpu.memory_mut().write(0x8000, 0xFF);

        let result = cpu.step();

        assert_eq!(
            result,
            Err(ExecutionError::UnrecognizedOpcode {
                opcode: 0xFF,
                address: 0x8000
            })
        );
        assert_eq!(cpu.pc(), 0x8001);
        assert_eq!(cpu.cycles(), 1);
    }

    #[test]
    fn test_execute_zero_budget_runs_nothing() {
        let mut cpu = setup_cpu();
        cpu.memory_mut().write(0x8000, 0xEA);

        assert_eq!(cpu.execute(0), Ok(0));
        assert_eq!(cpu.pc(), 0x8000);
    }

    #[test]
    fn test_execute_completes_instruction_past_budget() {
        let mut cpu = setup_cpu();
        // JSR $9000: six cycles even with one cycle of budget
        cpu.memory_mut().load(0x8000, &[0x20, 0x00, 0x90]);

        assert_eq!(cpu.execute(1), Ok(6));
        assert_eq!(cpu.pc(), 0x9000);
    }
}
