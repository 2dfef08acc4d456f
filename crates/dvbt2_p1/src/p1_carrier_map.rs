// DOC: ETSI EN 302 755
// Referring to the P1 symbol description
// The 384 active carriers are spread over the middle 853 carriers of a 1K FFT
// following the carrier distribution sequence (CDS).

/// Offset of the first usable carrier within the 1024 bin P1 spectrum.
pub const P1_CARRIER_OFFSET: usize = 86;
/// Number of bins in the P1 spectrum.
pub const P1_FFT_SIZE: usize = 1024;
/// Number of active carriers in the P1 spectrum.
pub const P1_TOTAL_CARRIERS: usize = 384;

/// Active carriers of the P1 symbol before the offset into the 1024 bin FFT.
/// Sorted in ascending order.
pub const P1_ACTIVE_CARRIERS: [usize; 384] = [
     44,  45,  47,  51,  54,  59,  62,  64,  65,  66,  70,  75,  78,  80,  81,  82,
     84,  85,  87,  88,  89,  90,  94,  96,  97,  98, 102, 107, 110, 112, 113, 114,
    116, 117, 119, 120, 121, 122, 124, 125, 127, 131, 132, 133, 135, 136, 137, 138,
    142, 144, 145, 146, 148, 149, 151, 152, 153, 154, 158, 160, 161, 162, 166, 171,
    172, 173, 175, 179, 182, 187, 190, 192, 193, 194, 198, 203, 206, 208, 209, 210,
    212, 213, 215, 216, 217, 218, 222, 224, 225, 226, 230, 235, 238, 240, 241, 242,
    244, 245, 247, 248, 249, 250, 252, 253, 255, 259, 260, 261, 263, 264, 265, 266,
    270, 272, 273, 274, 276, 277, 279, 280, 281, 282, 286, 288, 289, 290, 294, 299,
    300, 301, 303, 307, 310, 315, 318, 320, 321, 322, 326, 331, 334, 336, 337, 338,
    340, 341, 343, 344, 345, 346, 350, 352, 353, 354, 358, 363, 364, 365, 367, 371,
    374, 379, 382, 384, 385, 386, 390, 395, 396, 397, 399, 403, 406, 411, 412, 413,
    415, 419, 420, 421, 423, 424, 425, 426, 428, 429, 431, 435, 438, 443, 446, 448,
    449, 450, 454, 459, 462, 464, 465, 466, 468, 469, 471, 472, 473, 474, 478, 480,
    481, 482, 486, 491, 494, 496, 497, 498, 500, 501, 503, 504, 505, 506, 508, 509,
    511, 515, 516, 517, 519, 520, 521, 522, 526, 528, 529, 530, 532, 533, 535, 536,
    537, 538, 542, 544, 545, 546, 550, 555, 558, 560, 561, 562, 564, 565, 567, 568,
    569, 570, 572, 573, 575, 579, 580, 581, 583, 584, 585, 586, 588, 589, 591, 595,
    598, 603, 604, 605, 607, 611, 612, 613, 615, 616, 617, 618, 622, 624, 625, 626,
    628, 629, 631, 632, 633, 634, 636, 637, 639, 643, 644, 645, 647, 648, 649, 650,
    654, 656, 657, 658, 660, 661, 663, 664, 665, 666, 670, 672, 673, 674, 678, 683,
    684, 689, 692, 696, 698, 699, 701, 702, 703, 704, 706, 707, 708, 712, 714, 715,
    717, 718, 719, 720, 722, 723, 725, 726, 727, 729, 733, 734, 735, 736, 738, 739,
    740, 744, 746, 747, 748, 753, 756, 760, 762, 763, 765, 766, 767, 768, 770, 771,
    772, 776, 778, 779, 780, 785, 788, 792, 794, 795, 796, 801, 805, 806, 807, 809,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn carriers_are_strictly_increasing_and_fit_the_fft() {
        for pair in P1_ACTIVE_CARRIERS.windows(2) {
            assert!(pair[0] < pair[1]);
        }
        let last = P1_ACTIVE_CARRIERS[P1_TOTAL_CARRIERS-1] + P1_CARRIER_OFFSET;
        assert!(last < P1_FFT_SIZE);
        assert_eq!(P1_ACTIVE_CARRIERS[0], 44);
        assert_eq!(last, 895);
    }
}
