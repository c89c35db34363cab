//! DELFOR D96A delivery schedule segment explanations

use edi_explain::{SegmentEntry, SpecDescriptor, Standard};

pub(crate) fn descriptor() -> SpecDescriptor {
    SpecDescriptor::new(Standard::Edifact, "DELFOR", "D96A", "EDIFACT DELFOR D96A")
}

pub(crate) fn entries() -> Vec<SegmentEntry> {
    vec![
        SegmentEntry::new(
            "UNB",
            "The Interchange Header segment defines the interchange’s metadata, identifying the sender and recipient (using identifiers like GLN or DUNS), date/time of preparation, and a unique interchange control reference. It specifies the syntax rules (e.g., UNOC character set) and the application reference (e.g., DELFOR) for processing the interchange, which may contain multiple messages like DELFOR.",
            "Mandatory (M, an..4 for syntax identifier; M, an..35 for sender/recipient IDs; M, an..14 for control reference), Interchange Level (outside message structure), MaxOcc: 1. Example: UNB+UNOC:3+1234567890123:14+9876543210987:14+150301:1000+000000001++DELFOR. Note: Not explicitly detailed in the provided document, but standard for EDIFACT interchanges, likely used by Volvo Cars to route DELFOR messages to suppliers.",
        ),
        SegmentEntry::new(
            "UNH",
            "Marks the start of the DELFOR D96A message with a unique reference number, message type (DELFOR), version (D), release (96A), controlling agency (UN), and association code (A09040).",
            "Mandatory (M, an..14 for reference number; M, an..6 for message type), Level 0, MaxOcc: 1. Example: UNH+1144295+DELFOR:D:96A:UN:A09040.",
        ),
        SegmentEntry::new(
            "BGM",
            "Defines the document as a batch delivery schedule (code 241), assigns a unique schedule number, and specifies the message function (e.g., 5 for replacement, 9 for original).",
            "Mandatory (M, an..3 for document code; R, an..35 for schedule number), Level 0, MaxOcc: 1. Example: BGM+241+1000006440+5.",
        ),
        SegmentEntry::new(
            "DTM+137",
            "Specifies the document/message creation date/time (qualifier 137) in CCYYMMDD (102) or CCYYMMDDHHMM (203) format, indicating when the DELFOR was issued.",
            "Mandatory (M, an..3 for qualifier; R, an..12 for date), Level 1, MaxOcc: 3. Example: DTM+137:20150301:102.",
        ),
        SegmentEntry::new(
            "DTM+157",
            "Specifies the validity start date (qualifier 157) in CCYYMMDD (102) format, indicating when the delivery schedule becomes effective.",
            "Mandatory (M, an..3 for qualifier; R, an..12 for date), Level 1, MaxOcc: 3. Example: DTM+157:20150305:102.",
        ),
        SegmentEntry::new(
            "DTM+36",
            "Specifies the expiry date (qualifier 36) in CCYYMMDD (102) format, indicating when the delivery schedule expires, often used for short-term DELFORs.",
            "Mandatory (M, an..3 for qualifier; R, an..12 for date), Level 1, MaxOcc: 3. Example: DTM+36:20150415:102.",
        ),
        SegmentEntry::new(
            "NAD+BY",
            "Identifies the buyer (qualifier BY), typically a Volvo Cars entity (e.g., purchasing unit or plant), using a coded party identifier.",
            "Mandatory (M, an..3 for qualifier; M, an..20 for party ID), Level 1, MaxOcc: 1. Example: NAD+BY+1003::91.",
        ),
        SegmentEntry::new(
            "NAD+SE",
            "Identifies the seller (qualifier SE), the supplier providing parts or services, using a coded party identifier.",
            "Mandatory (M, an..3 for qualifier; M, an..20 for party ID), Level 1, MaxOcc: 1. Example: NAD+SE+2003::91.",
        ),
        SegmentEntry::new(
            "NAD+CN",
            "Identifies the consignee (qualifier CN), the delivery destination (e.g., a Volvo Cars plant or warehouse), using a coded party identifier.",
            "Mandatory (M, an..3 for qualifier; M, an..20 for party ID), Level 1, MaxOcc: 1, Conditional. Example: NAD+CN+BP2TD::91.",
        ),
        SegmentEntry::new(
            "UNS",
            "Separates the header from the detail section using code 'S' to indicate the detail/summary transition.",
            "Mandatory (M, a1 for section ID), Level 0, MaxOcc: 1. Example: UNS+S.",
        ),
        SegmentEntry::new(
            "LIN",
            "Identifies a part in the schedule using the buyer’s article number (Volvo Cars’ part number).",
            "Mandatory (M, an..35 for article number), Level 2, MaxOcc: 9999. Example: LIN+++12345678:IN.",
        ),
        SegmentEntry::new(
            "PIA",
            "Provides additional part identifiers (e.g., drawing revision, commodity code) to clarify specifications beyond the LIN segment.",
            "Conditional (C, an..35 for additional ID), Level 3, MaxOcc: 10. Example: PIA+1+PO4:DR.",
        ),
        SegmentEntry::new(
            "LOC+11",
            "Specifies the place/port of discharge (qualifier 11), the primary delivery location (e.g., a Volvo Cars plant), using a coded location ID.",
            "Required (R, an..35 for location code), Level 3, MaxOcc: 100. Example: LOC+11+TAV::91.",
        ),
        SegmentEntry::new(
            "LOC+159",
            "Specifies an additional internal destination (qualifier 159), an internal delivery point within the consignee’s facility (e.g., a specific dock or storage area).",
            "Required (R, an..35 for location code), Level 3, MaxOcc: 100. Example: LOC+159+DOCK1::91.",
        ),
        SegmentEntry::new(
            "DTM+257",
            "Specifies the calculation date/time (qualifier 257) in CCYYMMDDHHMM (203) format, indicating when delivery quantities were calculated.",
            "Conditional (C, an..35 for date), Level 3, MaxOcc: 1. Example: DTM+257:201503010015:203.",
        ),
        SegmentEntry::new(
            "DTM+51",
            "Specifies the cumulative quantity start date (qualifier 51) in CCYYMMDD (102) format, setting the baseline for tracking cumulative quantities.",
            "Conditional (C, an..35 for date), Level 3, MaxOcc: 1. Example: DTM+51:20150101:102.",
        ),
        SegmentEntry::new(
            "RFF+ON",
            "References a purchase order (qualifier ON), linking the delivery schedule to a specific order.",
            "Mandatory (M, an..35 for reference number), Level 3, MaxOcc: 1. Example: RFF+ON:111122222002.",
        ),
        SegmentEntry::new(
            "RFF+AIF",
            "References a previous delivery instruction (qualifier AIF), identifying the prior schedule for updates or replacements.",
            "Mandatory (M, an..35 for reference number), Level 3, MaxOcc: 1. Example: RFF+AIF:1000006412.",
        ),
        SegmentEntry::new(
            "QTY+70",
            "Specifies the cumulative quantity (qualifier 70) of parts received since the DTM+51 date, tracking total goods received.",
            "Mandatory (M, n..15 for quantity), Level 3, MaxOcc: 1. Example: QTY+70:9600.",
        ),
        SegmentEntry::new(
            "QTY+113",
            "Specifies the outstanding or scheduled quantity (qualifier 113), either the total ordered quantity not yet delivered or the quantity to be delivered on a specific date (linked to DTM+10), representing firm or forecast requirements.",
            "Mandatory (M, n..15 for quantity), Level 3, MaxOcc: 1 (for outstanding), MaxOcc: 200 (for scheduled). Example: QTY+113:500 (outstanding); QTY+113:64 (scheduled).",
        ),
        SegmentEntry::new(
            "QTY+83",
            "Specifies the backorder quantity (qualifier 83), ordered quantities not yet shipped or received, highlighting shortages.",
            "Mandatory (M, n..15 for quantity), Level 3, MaxOcc: 1. Example: QTY+83:128.",
        ),
        SegmentEntry::new(
            "QTY+12",
            "Specifies the despatched quantity (qualifier 12) from previous despatch notes (ASNs), tracking shipped quantities.",
            "Mandatory (M, n..15 for quantity), Level 3, MaxOcc: 200. Example: QTY+12:64.",
        ),
        SegmentEntry::new(
            "QTY+48",
            "Specifies the received quantity (qualifier 48) from previous despatch notes, tracking quantities received by the buyer.",
            "Mandatory (M, n..15 for quantity), Level 3, MaxOcc: 200. Example: QTY+48:64.",
        ),
        SegmentEntry::new(
            "RFF+AAK",
            "References a despatch advice (qualifier AAK), identifying the despatch note (ASN) associated with QTY+12/48 quantities.",
            "Mandatory (M, an..35 for reference number), Level 4, MaxOcc: 1. Example: RFF+AAK:12345678.",
        ),
        SegmentEntry::new(
            "DTM+11",
            "Specifies the despatch date (qualifier 11) in CCYYMMDD (102) format for quantities in QTY+12, indicating when goods were shipped.",
            "Conditional (C, an..35 for date), Level 5, MaxOcc: 1. Example: DTM+11:20150310:102.",
        ),
        SegmentEntry::new(
            "DTM+50",
            "Specifies the goods receipt date (qualifier 50) in CCYYMMDD (102) format for quantities in QTY+48, indicating when goods were received.",
            "Conditional (C, an..35 for date), Level 5, MaxOcc: 1. Example: DTM+50:20150312:102.",
        ),
        SegmentEntry::new(
            "SCC",
            "Defines the commitment level of scheduled quantities: Firm (1) or Planning/Forecast (4).",
            "Conditional (C, an..3 for condition code), Level 4, MaxOcc: 1. Example: SCC+1, SCC+4.",
        ),
        SegmentEntry::new(
            "DTM+10",
            "Specifies the requested shipment date/time (qualifier 10) in CCYYMMDDHHMM (203) format for the scheduled quantity in QTY+113.",
            "Conditional (C, an..35 for date), Level 4, MaxOcc: 2. Example: DTM+10:201503070800:203.",
        ),
        SegmentEntry::new(
            "RFF+AAO",
            "References a transport order (qualifier AAO) for scheduled quantities, ensuring logistics coordination.",
            "Mandatory (M, an..35 for reference number), Level 4, MaxOcc: 1. Example: RFF+AAO:FAA0001.",
        ),
        SegmentEntry::new(
            "UNT",
            "Closes the message with a segment count and repeats the UNH reference number for integrity.",
            "Mandatory (M, n..10 for segment count; M, an..14 for reference), Level 0, MaxOcc: 1. Example: UNT+25+1144295.",
        ),
    ]
}
