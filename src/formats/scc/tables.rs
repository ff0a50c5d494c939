/*!
 * Static code tables for the Scenarist (CEA-608) caption stream.
 *
 * Four disjoint code spaces are used:
 * - control codes (4 hex digits) such as row preambles and display commands
 * - standard characters (2 hex digits, two per code word)
 * - special characters (4 hex digits, one character per code word)
 * - extended characters (4 hex digits, one character per code word)
 *
 * The forward tables are plain slices; lookup maps and the inverted
 * character-to-code maps are built lazily once per process.
 */

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Semantics of a control code, as far as plain-text captions care
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlCode {
    /// Display or memory command with no effect on the caption text
    NoOp,
    /// Row preamble: starts a new caption row
    LineBreak,
    /// Row preamble that also switches italics on
    LineBreakItalic,
    /// Mid-row code switching italics on
    ItalicOn,
    /// Mid-row code switching italics off
    ItalicOff,
}

impl ControlCode {
    /// Whether the code starts a new caption row
    pub fn is_line_break(self) -> bool {
        matches!(self, Self::LineBreak | Self::LineBreakItalic)
    }
}

/// Padding byte used to keep special/extended codes word-aligned
pub const PADDING: &str = "80";

/// Character substituted for anything the tables cannot represent
pub const NO_SYMBOL: char = '#';

// Control codes, after pycaption's scc constants
static COMMAND_TABLE: &[(&str, ControlCode)] = &[
    ("9420", ControlCode::NoOp),
    ("9429", ControlCode::NoOp),
    ("9425", ControlCode::NoOp),
    ("9426", ControlCode::NoOp),
    ("94a7", ControlCode::NoOp),
    ("942a", ControlCode::NoOp),
    ("94ab", ControlCode::NoOp),
    ("942c", ControlCode::NoOp),
    ("94ae", ControlCode::NoOp),
    ("942f", ControlCode::NoOp),
    ("9779", ControlCode::LineBreak),
    ("9775", ControlCode::LineBreak),
    ("9776", ControlCode::LineBreak),
    ("9770", ControlCode::LineBreak),
    ("9773", ControlCode::LineBreak),
    ("10c8", ControlCode::LineBreak),
    ("10c2", ControlCode::LineBreak),
    ("166e", ControlCode::LineBreakItalic),
    ("166d", ControlCode::LineBreak),
    ("166b", ControlCode::LineBreak),
    ("10c4", ControlCode::LineBreak),
    ("9473", ControlCode::LineBreak),
    ("977f", ControlCode::LineBreak),
    ("977a", ControlCode::LineBreak),
    ("1668", ControlCode::LineBreak),
    ("1667", ControlCode::LineBreak),
    ("1664", ControlCode::LineBreak),
    ("1661", ControlCode::LineBreak),
    ("10ce", ControlCode::LineBreakItalic),
    ("94c8", ControlCode::LineBreak),
    ("94c7", ControlCode::LineBreak),
    ("94c4", ControlCode::LineBreak),
    ("94c2", ControlCode::LineBreak),
    ("94c1", ControlCode::LineBreak),
    ("915e", ControlCode::LineBreak),
    ("915d", ControlCode::LineBreak),
    ("915b", ControlCode::LineBreak),
    ("925d", ControlCode::LineBreak),
    ("925e", ControlCode::LineBreak),
    ("925b", ControlCode::LineBreak),
    ("97e6", ControlCode::LineBreak),
    ("97e5", ControlCode::LineBreak),
    ("97e3", ControlCode::LineBreak),
    ("97e0", ControlCode::LineBreak),
    ("97e9", ControlCode::LineBreak),
    ("9154", ControlCode::LineBreak),
    ("9157", ControlCode::LineBreak),
    ("9151", ControlCode::LineBreak),
    ("9258", ControlCode::LineBreak),
    ("9152", ControlCode::LineBreak),
    ("9257", ControlCode::LineBreak),
    ("9254", ControlCode::LineBreak),
    ("9252", ControlCode::LineBreak),
    ("9158", ControlCode::LineBreak),
    ("9251", ControlCode::LineBreak),
    ("94cd", ControlCode::LineBreak),
    ("94ce", ControlCode::LineBreakItalic),
    ("94cb", ControlCode::LineBreak),
    ("97ef", ControlCode::LineBreakItalic),
    ("1373", ControlCode::LineBreak),
    ("97ec", ControlCode::LineBreak),
    ("97ea", ControlCode::LineBreak),
    ("15c7", ControlCode::LineBreak),
    ("974f", ControlCode::LineBreakItalic),
    ("10c1", ControlCode::LineBreak),
    ("974a", ControlCode::LineBreak),
    ("974c", ControlCode::LineBreak),
    ("10c7", ControlCode::LineBreak),
    ("976d", ControlCode::LineBreak),
    ("15d6", ControlCode::LineBreak),
    ("15d5", ControlCode::LineBreak),
    ("15d3", ControlCode::LineBreak),
    ("15d0", ControlCode::LineBreak),
    ("15d9", ControlCode::LineBreak),
    ("9745", ControlCode::LineBreak),
    ("9746", ControlCode::LineBreak),
    ("9740", ControlCode::LineBreak),
    ("9743", ControlCode::LineBreak),
    ("9749", ControlCode::LineBreak),
    ("15df", ControlCode::LineBreak),
    ("15dc", ControlCode::LineBreak),
    ("15da", ControlCode::LineBreak),
    ("15f8", ControlCode::LineBreak),
    ("94fe", ControlCode::LineBreak),
    ("94fd", ControlCode::LineBreak),
    ("94fc", ControlCode::LineBreak),
    ("94fb", ControlCode::LineBreak),
    ("944f", ControlCode::LineBreakItalic),
    ("944c", ControlCode::LineBreak),
    ("944a", ControlCode::LineBreak),
    ("92fc", ControlCode::LineBreak),
    ("1051", ControlCode::LineBreak),
    ("1052", ControlCode::LineBreak),
    ("1054", ControlCode::LineBreak),
    ("92fe", ControlCode::LineBreak),
    ("92fd", ControlCode::LineBreak),
    ("1058", ControlCode::LineBreak),
    ("157a", ControlCode::LineBreak),
    ("157f", ControlCode::LineBreak),
    ("9279", ControlCode::LineBreak),
    ("94f4", ControlCode::LineBreak),
    ("94f7", ControlCode::LineBreak),
    ("94f1", ControlCode::LineBreak),
    ("9449", ControlCode::LineBreak),
    ("92fb", ControlCode::LineBreak),
    ("9446", ControlCode::LineBreak),
    ("9445", ControlCode::LineBreak),
    ("9443", ControlCode::LineBreak),
    ("94f8", ControlCode::LineBreak),
    ("9440", ControlCode::LineBreak),
    ("1057", ControlCode::LineBreak),
    ("9245", ControlCode::LineBreak),
    ("92f2", ControlCode::LineBreak),
    ("1579", ControlCode::LineBreak),
    ("92f7", ControlCode::LineBreak),
    ("105e", ControlCode::LineBreak),
    ("92f4", ControlCode::LineBreak),
    ("1573", ControlCode::LineBreak),
    ("1570", ControlCode::LineBreak),
    ("1576", ControlCode::LineBreak),
    ("1575", ControlCode::LineBreak),
    ("16c1", ControlCode::LineBreak),
    ("16c2", ControlCode::LineBreak),
    ("9168", ControlCode::LineBreak),
    ("16c7", ControlCode::LineBreak),
    ("9164", ControlCode::LineBreak),
    ("9167", ControlCode::LineBreak),
    ("9161", ControlCode::LineBreak),
    ("9162", ControlCode::LineBreak),
    ("947f", ControlCode::LineBreak),
    ("91c2", ControlCode::LineBreak),
    ("91c1", ControlCode::LineBreak),
    ("91c7", ControlCode::LineBreak),
    ("91c4", ControlCode::LineBreak),
    ("13e3", ControlCode::LineBreak),
    ("91c8", ControlCode::LineBreak),
    ("91d0", ControlCode::LineBreak),
    ("13e5", ControlCode::LineBreak),
    ("13c8", ControlCode::LineBreak),
    ("16cb", ControlCode::LineBreak),
    ("16cd", ControlCode::LineBreak),
    ("16ce", ControlCode::LineBreakItalic),
    ("916d", ControlCode::LineBreak),
    ("916e", ControlCode::LineBreakItalic),
    ("916b", ControlCode::LineBreak),
    ("91d5", ControlCode::LineBreak),
    ("137a", ControlCode::LineBreak),
    ("91cb", ControlCode::LineBreak),
    ("91ce", ControlCode::LineBreakItalic),
    ("91cd", ControlCode::LineBreak),
    ("13ec", ControlCode::LineBreak),
    ("13c1", ControlCode::LineBreak),
    ("13ea", ControlCode::LineBreak),
    ("13ef", ControlCode::LineBreakItalic),
    ("94f2", ControlCode::LineBreak),
    ("97fb", ControlCode::LineBreak),
    ("97fc", ControlCode::LineBreak),
    ("1658", ControlCode::LineBreak),
    ("97fd", ControlCode::LineBreak),
    ("97fe", ControlCode::LineBreak),
    ("1652", ControlCode::LineBreak),
    ("1651", ControlCode::LineBreak),
    ("1657", ControlCode::LineBreak),
    ("1654", ControlCode::LineBreak),
    ("10cb", ControlCode::LineBreak),
    ("97f2", ControlCode::LineBreak),
    ("97f1", ControlCode::LineBreak),
    ("97f7", ControlCode::LineBreak),
    ("97f4", ControlCode::LineBreak),
    ("165b", ControlCode::LineBreak),
    ("97f8", ControlCode::LineBreak),
    ("165d", ControlCode::LineBreak),
    ("165e", ControlCode::LineBreak),
    ("15cd", ControlCode::LineBreak),
    ("10cd", ControlCode::LineBreak),
    ("9767", ControlCode::LineBreak),
    ("9249", ControlCode::LineBreak),
    ("1349", ControlCode::LineBreak),
    ("91d9", ControlCode::LineBreak),
    ("1340", ControlCode::LineBreak),
    ("91d3", ControlCode::LineBreak),
    ("9243", ControlCode::LineBreak),
    ("1343", ControlCode::LineBreak),
    ("91d6", ControlCode::LineBreak),
    ("1345", ControlCode::LineBreak),
    ("1346", ControlCode::LineBreak),
    ("9246", ControlCode::LineBreak),
    ("94e9", ControlCode::LineBreak),
    ("94e5", ControlCode::LineBreak),
    ("94e6", ControlCode::LineBreak),
    ("94e0", ControlCode::LineBreak),
    ("94e3", ControlCode::LineBreak),
    ("15ea", ControlCode::LineBreak),
    ("15ec", ControlCode::LineBreak),
    ("15ef", ControlCode::LineBreakItalic),
    ("16fe", ControlCode::LineBreak),
    ("16fd", ControlCode::LineBreak),
    ("16fc", ControlCode::LineBreak),
    ("16fb", ControlCode::LineBreak),
    ("1367", ControlCode::LineBreak),
    ("94ef", ControlCode::LineBreakItalic),
    ("94ea", ControlCode::LineBreak),
    ("94ec", ControlCode::LineBreak),
    ("924a", ControlCode::LineBreak),
    ("91dc", ControlCode::LineBreak),
    ("924c", ControlCode::LineBreak),
    ("91da", ControlCode::LineBreak),
    ("91df", ControlCode::LineBreak),
    ("134f", ControlCode::LineBreakItalic),
    ("924f", ControlCode::LineBreakItalic),
    ("16f8", ControlCode::LineBreak),
    ("16f7", ControlCode::LineBreak),
    ("16f4", ControlCode::LineBreak),
    ("16f2", ControlCode::LineBreak),
    ("16f1", ControlCode::LineBreak),
    ("15e0", ControlCode::LineBreak),
    ("15e3", ControlCode::LineBreak),
    ("15e5", ControlCode::LineBreak),
    ("15e6", ControlCode::LineBreak),
    ("15e9", ControlCode::LineBreak),
    ("9757", ControlCode::LineBreak),
    ("9754", ControlCode::LineBreak),
    ("9752", ControlCode::LineBreak),
    ("9751", ControlCode::LineBreak),
    ("9758", ControlCode::LineBreak),
    ("92f1", ControlCode::LineBreak),
    ("104c", ControlCode::LineBreak),
    ("104a", ControlCode::LineBreak),
    ("104f", ControlCode::LineBreakItalic),
    ("105d", ControlCode::LineBreak),
    ("92f8", ControlCode::LineBreak),
    ("975e", ControlCode::LineBreak),
    ("975d", ControlCode::LineBreak),
    ("975b", ControlCode::LineBreak),
    ("1043", ControlCode::LineBreak),
    ("1040", ControlCode::LineBreak),
    ("1046", ControlCode::LineBreak),
    ("1045", ControlCode::LineBreak),
    ("1049", ControlCode::LineBreak),
    ("9479", ControlCode::LineBreak),
    ("917f", ControlCode::LineBreak),
    ("9470", ControlCode::LineBreak),
    ("9476", ControlCode::LineBreak),
    ("917a", ControlCode::LineBreak),
    ("9475", ControlCode::LineBreak),
    ("927a", ControlCode::LineBreak),
    ("927f", ControlCode::LineBreak),
    ("134a", ControlCode::LineBreak),
    ("15fb", ControlCode::LineBreak),
    ("15fc", ControlCode::LineBreak),
    ("15fd", ControlCode::LineBreak),
    ("15fe", ControlCode::LineBreak),
    ("1546", ControlCode::LineBreak),
    ("1545", ControlCode::LineBreak),
    ("1543", ControlCode::LineBreak),
    ("1540", ControlCode::LineBreak),
    ("1549", ControlCode::LineBreak),
    ("13fd", ControlCode::LineBreak),
    ("13fe", ControlCode::LineBreak),
    ("13fb", ControlCode::LineBreak),
    ("13fc", ControlCode::LineBreak),
    ("92e9", ControlCode::LineBreak),
    ("92e6", ControlCode::LineBreak),
    ("9458", ControlCode::LineBreak),
    ("92e5", ControlCode::LineBreak),
    ("92e3", ControlCode::LineBreak),
    ("92e0", ControlCode::LineBreak),
    ("9270", ControlCode::LineBreak),
    ("9273", ControlCode::LineBreak),
    ("9275", ControlCode::LineBreak),
    ("9276", ControlCode::LineBreak),
    ("15f1", ControlCode::LineBreak),
    ("15f2", ControlCode::LineBreak),
    ("15f4", ControlCode::LineBreak),
    ("15f7", ControlCode::LineBreak),
    ("9179", ControlCode::LineBreak),
    ("9176", ControlCode::LineBreak),
    ("9175", ControlCode::LineBreak),
    ("947a", ControlCode::LineBreak),
    ("9173", ControlCode::LineBreak),
    ("9170", ControlCode::LineBreak),
    ("13f7", ControlCode::LineBreak),
    ("13f4", ControlCode::LineBreak),
    ("13f2", ControlCode::LineBreak),
    ("13f1", ControlCode::LineBreak),
    ("92ef", ControlCode::LineBreakItalic),
    ("92ec", ControlCode::LineBreak),
    ("13f8", ControlCode::LineBreak),
    ("92ea", ControlCode::LineBreak),
    ("154f", ControlCode::LineBreakItalic),
    ("154c", ControlCode::LineBreak),
    ("154a", ControlCode::LineBreak),
    ("16c4", ControlCode::LineBreak),
    ("16c8", ControlCode::LineBreak),
    ("97c8", ControlCode::LineBreak),
    ("164f", ControlCode::LineBreakItalic),
    ("164a", ControlCode::LineBreak),
    ("164c", ControlCode::LineBreak),
    ("1645", ControlCode::LineBreak),
    ("1646", ControlCode::LineBreak),
    ("1640", ControlCode::LineBreak),
    ("1643", ControlCode::LineBreak),
    ("1649", ControlCode::LineBreak),
    ("94df", ControlCode::LineBreak),
    ("94dc", ControlCode::LineBreak),
    ("94da", ControlCode::LineBreak),
    ("135b", ControlCode::LineBreak),
    ("135e", ControlCode::LineBreak),
    ("135d", ControlCode::LineBreak),
    ("1370", ControlCode::LineBreak),
    ("9240", ControlCode::LineBreak),
    ("13e9", ControlCode::LineBreak),
    ("1375", ControlCode::LineBreak),
    ("1679", ControlCode::LineBreak),
    ("1358", ControlCode::LineBreak),
    ("1352", ControlCode::LineBreak),
    ("1351", ControlCode::LineBreak),
    ("1376", ControlCode::LineBreak),
    ("1357", ControlCode::LineBreak),
    ("1354", ControlCode::LineBreak),
    ("1379", ControlCode::LineBreak),
    ("94d9", ControlCode::LineBreak),
    ("94d6", ControlCode::LineBreak),
    ("94d5", ControlCode::LineBreak),
    ("1562", ControlCode::LineBreak),
    ("94d3", ControlCode::LineBreak),
    ("94d0", ControlCode::LineBreak),
    ("13e0", ControlCode::LineBreak),
    ("13e6", ControlCode::LineBreak),
    ("976b", ControlCode::LineBreak),
    ("15c4", ControlCode::LineBreak),
    ("15c2", ControlCode::LineBreak),
    ("15c1", ControlCode::LineBreak),
    ("976e", ControlCode::LineBreakItalic),
    ("134c", ControlCode::LineBreak),
    ("15c8", ControlCode::LineBreak),
    ("92c8", ControlCode::LineBreak),
    ("16e9", ControlCode::LineBreak),
    ("16e3", ControlCode::LineBreak),
    ("16e0", ControlCode::LineBreak),
    ("16e6", ControlCode::LineBreak),
    ("16e5", ControlCode::LineBreak),
    ("91e5", ControlCode::LineBreak),
    ("91e6", ControlCode::LineBreak),
    ("91e0", ControlCode::LineBreak),
    ("91e3", ControlCode::LineBreak),
    ("13c4", ControlCode::LineBreak),
    ("13c7", ControlCode::LineBreak),
    ("91e9", ControlCode::LineBreak),
    ("13c2", ControlCode::LineBreak),
    ("9762", ControlCode::LineBreak),
    ("15ce", ControlCode::LineBreakItalic),
    ("9761", ControlCode::LineBreak),
    ("15cb", ControlCode::LineBreak),
    ("9764", ControlCode::LineBreak),
    ("9768", ControlCode::LineBreak),
    ("91ef", ControlCode::LineBreakItalic),
    ("91ea", ControlCode::LineBreak),
    ("91ec", ControlCode::LineBreak),
    ("13ce", ControlCode::LineBreakItalic),
    ("13cd", ControlCode::LineBreak),
    ("97da", ControlCode::LineBreak),
    ("13cb", ControlCode::LineBreak),
    ("1362", ControlCode::LineBreak),
    ("16ec", ControlCode::LineBreak),
    ("16ea", ControlCode::LineBreak),
    ("16ef", ControlCode::LineBreakItalic),
    ("97c1", ControlCode::LineBreak),
    ("97c2", ControlCode::LineBreak),
    ("97c4", ControlCode::LineBreak),
    ("97c7", ControlCode::LineBreak),
    ("92cd", ControlCode::LineBreak),
    ("92ce", ControlCode::LineBreakItalic),
    ("92cb", ControlCode::LineBreak),
    ("92da", ControlCode::LineBreak),
    ("92dc", ControlCode::LineBreak),
    ("92df", ControlCode::LineBreak),
    ("97df", ControlCode::LineBreak),
    ("155b", ControlCode::LineBreak),
    ("155e", ControlCode::LineBreak),
    ("155d", ControlCode::LineBreak),
    ("97dc", ControlCode::LineBreak),
    ("1675", ControlCode::LineBreak),
    ("1676", ControlCode::LineBreak),
    ("1670", ControlCode::LineBreak),
    ("1673", ControlCode::LineBreak),
    ("1662", ControlCode::LineBreak),
    ("97cb", ControlCode::LineBreak),
    ("97ce", ControlCode::LineBreakItalic),
    ("97cd", ControlCode::LineBreak),
    ("92c4", ControlCode::LineBreak),
    ("92c7", ControlCode::LineBreak),
    ("92c1", ControlCode::LineBreak),
    ("92c2", ControlCode::LineBreak),
    ("1551", ControlCode::LineBreak),
    ("97d5", ControlCode::LineBreak),
    ("97d6", ControlCode::LineBreak),
    ("1552", ControlCode::LineBreak),
    ("97d0", ControlCode::LineBreak),
    ("1554", ControlCode::LineBreak),
    ("1557", ControlCode::LineBreak),
    ("97d3", ControlCode::LineBreak),
    ("1558", ControlCode::LineBreak),
    ("167f", ControlCode::LineBreak),
    ("137f", ControlCode::LineBreak),
    ("167a", ControlCode::LineBreak),
    ("92d9", ControlCode::LineBreak),
    ("92d0", ControlCode::LineBreak),
    ("92d3", ControlCode::LineBreak),
    ("92d5", ControlCode::LineBreak),
    ("92d6", ControlCode::LineBreak),
    ("10dc", ControlCode::LineBreak),
    ("9262", ControlCode::LineBreak),
    ("9261", ControlCode::LineBreak),
    ("91f8", ControlCode::LineBreak),
    ("10df", ControlCode::LineBreak),
    ("9264", ControlCode::LineBreak),
    ("91f4", ControlCode::LineBreak),
    ("91f7", ControlCode::LineBreak),
    ("91f1", ControlCode::LineBreak),
    ("91f2", ControlCode::LineBreak),
    ("97d9", ControlCode::LineBreak),
    ("9149", ControlCode::LineBreak),
    ("9143", ControlCode::LineBreak),
    ("9140", ControlCode::LineBreak),
    ("9146", ControlCode::LineBreak),
    ("9145", ControlCode::LineBreak),
    ("9464", ControlCode::LineBreak),
    ("9467", ControlCode::LineBreak),
    ("9461", ControlCode::LineBreak),
    ("9462", ControlCode::LineBreak),
    ("9468", ControlCode::LineBreak),
    ("914c", ControlCode::LineBreak),
    ("914a", ControlCode::LineBreak),
    ("914f", ControlCode::LineBreakItalic),
    ("10d3", ControlCode::LineBreak),
    ("926b", ControlCode::LineBreak),
    ("10d0", ControlCode::LineBreak),
    ("10d6", ControlCode::LineBreak),
    ("926e", ControlCode::LineBreakItalic),
    ("926d", ControlCode::LineBreak),
    ("91fd", ControlCode::LineBreak),
    ("91fe", ControlCode::LineBreak),
    ("10d9", ControlCode::LineBreak),
    ("91fb", ControlCode::LineBreak),
    ("91fc", ControlCode::LineBreak),
    ("946e", ControlCode::LineBreakItalic),
    ("946d", ControlCode::LineBreak),
    ("946b", ControlCode::LineBreak),
    ("10da", ControlCode::LineBreak),
    ("10d5", ControlCode::LineBreak),
    ("9267", ControlCode::LineBreak),
    ("9268", ControlCode::LineBreak),
    ("16df", ControlCode::LineBreak),
    ("16da", ControlCode::LineBreak),
    ("16dc", ControlCode::LineBreak),
    ("9454", ControlCode::LineBreak),
    ("9457", ControlCode::LineBreak),
    ("9451", ControlCode::LineBreak),
    ("9452", ControlCode::LineBreak),
    ("136d", ControlCode::LineBreak),
    ("136e", ControlCode::LineBreakItalic),
    ("136b", ControlCode::LineBreak),
    ("13d9", ControlCode::LineBreak),
    ("13da", ControlCode::LineBreak),
    ("13dc", ControlCode::LineBreak),
    ("13df", ControlCode::LineBreak),
    ("1568", ControlCode::LineBreak),
    ("1561", ControlCode::LineBreak),
    ("1564", ControlCode::LineBreak),
    ("1567", ControlCode::LineBreak),
    ("16d5", ControlCode::LineBreak),
    ("16d6", ControlCode::LineBreak),
    ("16d0", ControlCode::LineBreak),
    ("16d3", ControlCode::LineBreak),
    ("945d", ControlCode::LineBreak),
    ("945e", ControlCode::LineBreak),
    ("16d9", ControlCode::LineBreak),
    ("945b", ControlCode::LineBreak),
    ("156b", ControlCode::LineBreak),
    ("156d", ControlCode::LineBreak),
    ("156e", ControlCode::LineBreakItalic),
    ("105b", ControlCode::LineBreak),
    ("1364", ControlCode::LineBreak),
    ("1368", ControlCode::LineBreak),
    ("1361", ControlCode::LineBreak),
    ("13d0", ControlCode::LineBreak),
    ("13d3", ControlCode::LineBreak),
    ("13d5", ControlCode::LineBreak),
    ("13d6", ControlCode::LineBreak),
    ("97a1", ControlCode::NoOp),
    ("97a2", ControlCode::NoOp),
    ("9723", ControlCode::NoOp),
    ("94a1", ControlCode::NoOp),
    ("94a4", ControlCode::NoOp),
    ("94ad", ControlCode::NoOp),
    ("1020", ControlCode::NoOp),
    ("10a1", ControlCode::NoOp),
    ("10a2", ControlCode::NoOp),
    ("1023", ControlCode::NoOp),
    ("10a4", ControlCode::NoOp),
    ("1025", ControlCode::NoOp),
    ("1026", ControlCode::NoOp),
    ("10a7", ControlCode::NoOp),
    ("10a8", ControlCode::NoOp),
    ("1029", ControlCode::NoOp),
    ("102a", ControlCode::NoOp),
    ("10ab", ControlCode::NoOp),
    ("102c", ControlCode::NoOp),
    ("10ad", ControlCode::NoOp),
    ("10ae", ControlCode::NoOp),
    ("102f", ControlCode::NoOp),
    ("97ad", ControlCode::NoOp),
    ("97a4", ControlCode::NoOp),
    ("9725", ControlCode::NoOp),
    ("9726", ControlCode::NoOp),
    ("97a7", ControlCode::NoOp),
    ("97a8", ControlCode::NoOp),
    ("9729", ControlCode::NoOp),
    ("972a", ControlCode::NoOp),
    ("9120", ControlCode::ItalicOff),
    ("91a1", ControlCode::NoOp),
    ("91a2", ControlCode::NoOp),
    ("9123", ControlCode::NoOp),
    ("91a4", ControlCode::NoOp),
    ("9125", ControlCode::NoOp),
    ("9126", ControlCode::NoOp),
    ("91a7", ControlCode::NoOp),
    ("91a8", ControlCode::NoOp),
    ("9129", ControlCode::NoOp),
    ("912a", ControlCode::NoOp),
    ("91ab", ControlCode::NoOp),
    ("912c", ControlCode::NoOp),
    ("91ad", ControlCode::NoOp),
    ("97ae", ControlCode::NoOp),
    ("972f", ControlCode::NoOp),
    ("91ae", ControlCode::ItalicOn),
    ("912f", ControlCode::ItalicOn),
    ("94a8", ControlCode::NoOp),
    ("9423", ControlCode::NoOp),
    ("94a2", ControlCode::NoOp),
];

// Standard characters; "7f" and "80" are fillers and decode to nothing
static CHARACTER_TABLE: &[(&str, &str)] = &[
    ("20", " "),
    ("a1", "!"),
    ("a2", "\""),
    ("23", "#"),
    ("a4", "$"),
    ("25", "%"),
    ("26", "&"),
    ("a7", "'"),
    ("a8", "("),
    ("29", ")"),
    ("2a", "á"),
    ("ab", "+"),
    ("2c", ","),
    ("ad", "-"),
    ("ae", "."),
    ("2f", "/"),
    ("b0", "0"),
    ("31", "1"),
    ("32", "2"),
    ("b3", "3"),
    ("34", "4"),
    ("b5", "5"),
    ("b6", "6"),
    ("37", "7"),
    ("38", "8"),
    ("b9", "9"),
    ("ba", ":"),
    ("3b", ";"),
    ("bc", "<"),
    ("3d", "="),
    ("3e", ">"),
    ("bf", "?"),
    ("40", "@"),
    ("c1", "A"),
    ("c2", "B"),
    ("43", "C"),
    ("c4", "D"),
    ("45", "E"),
    ("46", "F"),
    ("c7", "G"),
    ("c8", "H"),
    ("49", "I"),
    ("4a", "J"),
    ("cb", "K"),
    ("4c", "L"),
    ("cd", "M"),
    ("ce", "N"),
    ("4f", "O"),
    ("d0", "P"),
    ("51", "Q"),
    ("52", "R"),
    ("d3", "S"),
    ("54", "T"),
    ("d5", "U"),
    ("d6", "V"),
    ("57", "W"),
    ("58", "X"),
    ("d9", "Y"),
    ("da", "Z"),
    ("5b", "["),
    ("dc", "é"),
    ("5d", "]"),
    ("5e", "í"),
    ("df", "ó"),
    ("e0", "ú"),
    ("61", "a"),
    ("62", "b"),
    ("e3", "c"),
    ("64", "d"),
    ("e5", "e"),
    ("e6", "f"),
    ("67", "g"),
    ("68", "h"),
    ("e9", "i"),
    ("ea", "j"),
    ("6b", "k"),
    ("ec", "l"),
    ("6d", "m"),
    ("6e", "n"),
    ("ef", "o"),
    ("70", "p"),
    ("f1", "q"),
    ("f2", "r"),
    ("73", "s"),
    ("f4", "t"),
    ("75", "u"),
    ("76", "v"),
    ("f7", "w"),
    ("f8", "x"),
    ("79", "y"),
    ("7a", "z"),
    ("fb", "ç"),
    ("7c", "÷"),
    ("fd", "Ñ"),
    ("fe", "ñ"),
    ("7f", ""),
    ("80", ""),
];

static SPECIAL_CHARACTER_TABLE: &[(&str, char)] = &[
    ("91b0", '®'),
    ("9131", '°'),
    ("9132", '½'),
    ("91b3", '¿'),
    ("9134", '™'),
    ("91b5", '¢'),
    ("91b6", '£'),
    ("9137", '♪'),
    ("9138", 'à'),
    ("91b9", ' '),
    ("91ba", 'è'),
    ("913b", 'â'),
    ("91bc", 'ê'),
    ("913d", 'î'),
    ("913e", 'ô'),
    ("91bf", 'û'),
];

static EXTENDED_CHARACTER_TABLE: &[(&str, char)] = &[
    ("9220", 'Á'),
    ("92a1", 'É'),
    ("92a2", 'Ó'),
    ("9223", 'Ú'),
    ("92a4", 'Ü'),
    ("9225", 'ü'),
    ("9226", '‘'),
    ("92a7", '¡'),
    ("92a8", '*'),
    ("9229", '’'),
    ("922a", '—'),
    ("92ab", '©'),
    ("922c", '℠'),
    ("92ad", '•'),
    ("92ae", '“'),
    ("922f", '”'),
    ("92b0", 'À'),
    ("9231", 'Â'),
    ("9232", 'Ç'),
    ("92b3", 'È'),
    ("9234", 'Ê'),
    ("92b5", 'Ë'),
    ("92b6", 'ë'),
    ("9237", 'Î'),
    ("9238", 'Ï'),
    ("92b9", 'ï'),
    ("92ba", 'Ô'),
    ("923b", 'Ù'),
    ("92bc", 'ù'),
    ("923d", 'Û'),
    ("923e", '«'),
    ("92bf", '»'),
    ("1320", 'Ã'),
    ("13a1", 'ã'),
    ("13a2", 'Í'),
    ("1323", 'Ì'),
    ("13a4", 'ì'),
    ("1325", 'Ò'),
    ("1326", 'ò'),
    ("13a7", 'Õ'),
    ("13a8", 'õ'),
    ("1329", '{'),
    ("132a", '}'),
    ("13ab", '\\'),
    ("132c", '^'),
    ("13ad", '_'),
    ("13ae", '¦'),
    ("132f", '~'),
    ("13b0", 'Ä'),
    ("1331", 'ä'),
    ("1332", 'Ö'),
    ("13b3", 'ö'),
    ("1334", 'ß'),
    ("13b5", '¥'),
    ("13b6", '¤'),
    ("1337", '|'),
    ("1338", 'Å'),
    ("13b9", 'å'),
    ("13ba", 'Ø'),
    ("133b", 'ø'),
    ("13bc", '┌'),
    ("133d", '┐'),
    ("133e", '└'),
    ("13bf", '┘'),
];

static COMMANDS: Lazy<HashMap<&'static str, ControlCode>> =
    Lazy::new(|| COMMAND_TABLE.iter().copied().collect());

static CHARACTERS: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| CHARACTER_TABLE.iter().copied().collect());

static SPECIAL_CHARACTERS: Lazy<HashMap<&'static str, char>> =
    Lazy::new(|| SPECIAL_CHARACTER_TABLE.iter().copied().collect());

static EXTENDED_CHARACTERS: Lazy<HashMap<&'static str, char>> =
    Lazy::new(|| EXTENDED_CHARACTER_TABLE.iter().copied().collect());

// Fillers have no character and are skipped when inverting
static CHARACTER_CODES: Lazy<HashMap<char, &'static str>> = Lazy::new(|| {
    CHARACTER_TABLE
        .iter()
        .filter_map(|&(code, text)| {
            let mut chars = text.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Some((c, code)),
                _ => None,
            }
        })
        .collect()
});

static SPECIAL_CHARACTER_CODES: Lazy<HashMap<char, &'static str>> =
    Lazy::new(|| invert(SPECIAL_CHARACTER_TABLE));

static EXTENDED_CHARACTER_CODES: Lazy<HashMap<char, &'static str>> =
    Lazy::new(|| invert(EXTENDED_CHARACTER_TABLE));

fn invert(table: &'static [(&'static str, char)]) -> HashMap<char, &'static str> {
    table.iter().map(|&(code, c)| (c, code)).collect()
}

/// Look up a 4-digit control code
pub fn command(code: &str) -> Option<ControlCode> {
    COMMANDS.get(code).copied()
}

/// Look up a 2-digit standard character; fillers yield an empty string
pub fn character(code: &str) -> Option<&'static str> {
    CHARACTERS.get(code).copied()
}

/// Look up a 4-digit special character
pub fn special_character(code: &str) -> Option<char> {
    SPECIAL_CHARACTERS.get(code).copied()
}

/// Look up a 4-digit extended character
pub fn extended_character(code: &str) -> Option<char> {
    EXTENDED_CHARACTERS.get(code).copied()
}

/// How a single character is written into the code stream
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharacterCode {
    /// Two hex digits, packed two per code word
    Standard(&'static str),
    /// A full code word from the special or extended set
    Wide(&'static str),
}

/// Find the code for a character, preferring the standard set
pub fn encode_character(c: char) -> Option<CharacterCode> {
    if let Some(code) = CHARACTER_CODES.get(&c) {
        return Some(CharacterCode::Standard(code));
    }
    SPECIAL_CHARACTER_CODES
        .get(&c)
        .or_else(|| EXTENDED_CHARACTER_CODES.get(&c))
        .map(|code| CharacterCode::Wide(code))
}

/// Whether a character can be written without substitution
pub fn is_encodable(c: char) -> bool {
    encode_character(c).is_some()
}
