//! DESADV D96A despatch advice segment explanations

use edi_explain::{SegmentEntry, SpecDescriptor, Standard};

pub(crate) fn descriptor() -> SpecDescriptor {
    SpecDescriptor::new(Standard::Edifact, "DESADV", "D96A", "EDIFACT DESADV D96A")
}

pub(crate) fn entries() -> Vec<SegmentEntry> {
    vec![
        SegmentEntry::new(
            "UNB",
            "The Interchange Header segment defines the interchange’s metadata, identifying the sender and recipient (e.g., using GLN or DUNS), preparation date/time, and a unique interchange control reference. It specifies syntax rules (e.g., UNOC character set) and the application reference (e.g., DESADV).",
            "Mandatory (M, an..4 for syntax identifier; M, an..35 for sender/recipient IDs; M, an..14 for control reference), Interchange Level, MaxOcc: 1. Example: UNB+UNOC:3+1234567890123:14+9876543210987:14+241106:1200+000000001++DESADV.",
        ),
        SegmentEntry::new(
            "UNH",
            "Marks the start of the DESADV D96A message with a unique reference number, message type (DESADV), version (D), release (96A), controlling agency (UN), and association code (A01051).",
            "Mandatory (M, an..14 for reference number; M, an..6 for message type), Level 0, MaxOcc: 1. Example: UNH+00001+DESADV:D:96A:UN:A01051.",
        ),
        SegmentEntry::new(
            "BGM",
            "Defines the document as a despatch advice (code 351), assigns a unique despatch advice number, and specifies the message function (e.g., 9 for original).",
            "Mandatory (M, an..3 for document code; R, an..35 for despatch advice number), Level 0, MaxOcc: 1. Example: BGM+351+123456789+9.",
        ),
        SegmentEntry::new(
            "DTM",
            "Specifies the despatch advice issuance date/time (qualifier 137) in CCYYMMDD (102) format, indicating when the DESADV was created.",
            "Required (R, an..3 for qualifier; R, an..12 for date), Level 1, MaxOcc: 1. Example: DTM+137:20241106:102. Note: Inferred from message structure and EDIFACT standard, as not detailed in provided document.",
        ),
        SegmentEntry::new(
            "MEA+WT",
            "Specifies the total consignment goods gross weight (qualifier WT), including all packages and contents, in a specified unit (e.g., kilograms).",
            "Optional (O, an..3 for measurement qualifier; R, n..18 for value), Level 1, MaxOcc: 5. Example: MEA+WT+G+KGM:1500. Note: Inferred from message structure (MEA MaxOcc: 5) and EDIFACT standard.",
        ),
        SegmentEntry::new(
            "MEA+VOL",
            "Specifies the total consignment goods volume (qualifier VOL), including all packages, in a specified unit (e.g., cubic meters).",
            "Optional (O, an..3 for measurement qualifier; R, n..18 for value), Level 1, MaxOcc: 5. Example: MEA+VOL+V+MTQ:5.5. Note: Inferred from EDIFACT standard, as MEA allows multiple qualifiers.",
        ),
        SegmentEntry::new(
            "RFF+AAK",
            "References the despatch advice number (qualifier AAK), linking the DESADV to the shipment notification.",
            "Required (R, an..3 for qualifier; R, an..35 for reference number), Level 1, MaxOcc: 1. Example: RFF+AAK:123456789. Note: Inferred from message structure and EDIFACT standard for transport reference.",
        ),
        SegmentEntry::new(
            "RFF+ON",
            "References the purchase order number (qualifier ON) from the DELFOR message, linking the despatch to a specific order at the header level.",
            "Required (R, an..3 for qualifier; R, an..35 for reference number), Level 1, MaxOcc: 1. Example: RFF+ON:PO123456. Note: Inferred from EDIFACT standard, as RFF may include order references.",
        ),
        SegmentEntry::new(
            "NAD+CS",
            "Identifies the consignor (qualifier CS), the party dispatching the goods, using a coded party identifier (e.g., GLN or Volvo-assigned ID).",
            "Required (R, an..3 for qualifier; R, an..35 for party ID), Level 1, MaxOcc: 1. Example: NAD+CS+SUPPLIER001::92. Note: From message structure (Consignor).",
        ),
        SegmentEntry::new(
            "NAD+SE",
            "Identifies the seller (qualifier SE), the supplier responsible for the goods, using a coded party identifier.",
            "Dependent (D, an..3 for qualifier; R, an..35 for party ID), Level 1, MaxOcc: 1. Example: NAD+SE+2003::92. Note: From message structure (Seller).",
        ),
        SegmentEntry::new(
            "NAD+CN",
            "Identifies the consignee (qualifier CN), the destination (e.g., Volvo Cars plant or warehouse), using a coded party identifier.",
            "Required (R, an..3 for qualifier; R, an..35 for party ID), Level 1, MaxOcc: 1. Example: NAD+CN+BP2TD::92. Note: From message structure (Consignee).",
        ),
        SegmentEntry::new(
            "NAD+CA",
            "Identifies the carrier (qualifier CA), the transport company responsible for delivering the goods.",
            "Required (R, an..3 for qualifier; R, an..35 for party ID), Level 1, MaxOcc: 1. Example: NAD+CA+CARRIER001::92. Note: From message structure (Carrier).",
        ),
        SegmentEntry::new(
            "LOC+11",
            "Specifies the place/port of discharge (qualifier 11), the primary delivery location (e.g., a Volvo Cars plant), using a coded location ID.",
            "Dependent (D, an..3 for qualifier; R, an..25 for location ID), Level 2, MaxOcc: 1. Example: LOC+11+TAV::92. Note: From message structure.",
        ),
        SegmentEntry::new(
            "EQD",
            "Specifies equipment details (e.g., trailer or container type) used in the transport, including equipment identification.",
            "Dependent (D, an..17 for equipment ID), Level 1, MaxOcc: 10. Example: EQD+TR+TRAILER001. Note: From message structure.",
        ),
        SegmentEntry::new(
            "CPS",
            "Specifies the consignment packing sequence, identifying the hierarchical level of packaging (e.g., pallet, box) within the despatch.",
            "Required (R, an..17 for hierarchical ID), Level 1, MaxOcc: 999. Example: CPS+1. Note: From message structure.",
        ),
        SegmentEntry::new(
            "PAC",
            "Describes the number and type of packages (e.g., pallets, boxes) in the consignment, including package type codes.",
            "Required (R, n..8 for number of packages; R, an..17 for package type), Level 2, MaxOcc: 999. Example: PAC+10++PAL. Note: From message structure.",
        ),
        SegmentEntry::new(
            "QTY+52",
            "Specifies the number of packages (qualifier 52) in the consignment, as described in the PAC segment.",
            "Required (R, an..3 for qualifier; R, n..15 for quantity), Level 3, MaxOcc: 1. Example: QTY+52:10. Note: From message structure.",
        ),
        SegmentEntry::new(
            "PCI",
            "Identifies package markings (e.g., labels, barcodes) for tracking or handling instructions.",
            "Required (R, an..35 for marking instruction), Level 3, MaxOcc: 1000. Example: PCI+33E. Note: From message structure.",
        ),
        SegmentEntry::new(
            "RFF+PK",
            "References the package identification number (qualifier PK), linking the package to a specific identifier.",
            "Dependent (D, an..3 for qualifier; R, an..35 for reference number), Level 4, MaxOcc: 1. Example: RFF+PK:PKG12345. Note: From message structure.",
        ),
        SegmentEntry::new(
            "GIR",
            "Provides related identification numbers (e.g., serial numbers, batch numbers) for items within a package.",
            "Required (R, an..35 for identification number), Level 4, MaxOcc: 99. Example: GIR+1+SER123:BJ. Note: From message structure.",
        ),
        SegmentEntry::new(
            "GIN+BJ",
            "Specifies the goods identity number (qualifier BJ, batch number) for items in the package.",
            "Required (R, an..3 for qualifier; R, an..35 for identity number), Level 4, MaxOcc: 99. Example: GIN+BJ+BATCH001. Note: From message structure.",
        ),
        SegmentEntry::new(
            "LIN",
            "Identifies a specific item in the despatch using the buyer’s article number (Volvo Cars’ part number) from the DELFOR message.",
            "Required (R, an..35 for article number), Level 2, MaxOcc: 999. Example: LIN+++12345678:IN. Note: From message structure.",
        ),
        SegmentEntry::new(
            "PIA",
            "Provides additional item identifiers (e.g., supplier’s part number, drawing revision) to clarify specifications beyond the LIN segment.",
            "Dependent (D, an..35 for additional ID), Level 3, MaxOcc: 1. Example: PIA+1+SUP123:SA. Note: From message structure.",
        ),
        SegmentEntry::new(
            "QTY+12",
            "Specifies the despatched quantity (qualifier 12) of the item identified in the LIN segment, indicating the number of units shipped.",
            "Required (R, an..3 for qualifier; R, n..15 for quantity), Level 3, MaxOcc: 1. Example: QTY+12:100. Note: From message structure.",
        ),
        SegmentEntry::new(
            "ALI",
            "Provides additional information about the item (e.g., country of origin, customs status) for regulatory or logistical purposes.",
            "Required (R, an..3 for information code), Level 3, MaxOcc: 1. Example: ALI+US. Note: From message structure.",
        ),
        SegmentEntry::new(
            "GIN+ML",
            "Specifies the goods identity number (qualifier ML, serial number) for individual items in the despatch.",
            "Dependent (D, an..3 for qualifier; R, an..35 for identity number), Level 3, MaxOcc: 100. Example: GIN+ML+SERIAL123. Note: From message structure.",
        ),
        SegmentEntry::new(
            "MOA",
            "Specifies monetary amounts (e.g., item value) associated with the despatch for financial or customs purposes.",
            "Dependent (D, n..18 for amount), Level 3, MaxOcc: 1. Example: MOA+203:1000. Note: From message structure.",
        ),
        SegmentEntry::new(
            "RFF+AEE",
            "References the despatch note number (qualifier AEE) associated with the line item, used for tracking shipments.",
            "Dependent (D, an..3 for qualifier; R, an..35 for reference number), Level 3, MaxOcc: 1. Example: RFF+AEE:DESP123.",
        ),
        SegmentEntry::new(
            "RFF+IV",
            "References the invoice number (qualifier IV) associated with the line item, used for financial reconciliation.",
            "Dependent (D, an..3 for qualifier; R, an..35 for reference number), Level 3, MaxOcc: 1. Example: RFF+IV:INV202411001.",
        ),
        SegmentEntry::new(
            "DTM+171",
            "Specifies the reference date/time (qualifier 171) for the despatch note or invoice (when RFF qualifier is AEE or IV), in CCYYMMDD format.",
            "Dependent (D, an..3 for qualifier; R, an..8 for date), Level 4, MaxOcc: 1. Example: DTM+171:20241106:102.",
        ),
        SegmentEntry::new(
            "LOC+159",
            "Specifies an additional internal destination (qualifier 159), an internal delivery point within the consignee’s facility (e.g., dock or gate), printed on the transport label in the ‘Dock/Gate’ field, corresponding to DELFOR’s LOC+159.",
            "Required (R, an..3 for qualifier; R, an..12 for location ID), Level 3, MaxOcc: 1. Example: LOC+159+TVV::92.",
        ),
        SegmentEntry::new(
            "UNT",
            "Closes the message with a segment count and repeats the UNH reference number for integrity.",
            "Mandatory (M, n..6 for segment count; M, an..14 for reference), Level 0, MaxOcc: 1. Example: UNT+21+00001.",
        ),
        SegmentEntry::new(
            "UNZ",
            "The Interchange Trailer segment closes the interchange, specifying the number of messages and repeating the UNB control reference.",
            "Mandatory (M, n..6 for message count; M, an..14 for control reference), Interchange Level, MaxOcc: 1. Example: UNZ+1+000000001. Note: Inferred from EDIFACT standard, as not detailed in provided document.",
        ),
    ]
}
